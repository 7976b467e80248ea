use crate::{LeadRequest, MIN_FILL_MILLIS};

/// Outcome of the abuse filters. Anything other than `Accept` is reported to
/// the submitter as a success so automated agents learn nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screening {
    Accept,
    Honeypot,
    TooFast,
}

impl Screening {
    pub fn is_accepted(self) -> bool {
        matches!(self, Screening::Accept)
    }
}

pub fn honeypot_tripped(company: Option<&str>) -> bool {
    company.is_some_and(|c| !c.trim().is_empty())
}

/// `now_ms` and `rendered_at_ms` are epoch milliseconds. A missing, zero or
/// negative render timestamp counts as too fast.
pub fn time_trap_tripped(rendered_at_ms: Option<f64>, now_ms: f64) -> bool {
    match rendered_at_ms {
        Some(ts) if ts > 0.0 => now_ms - ts < MIN_FILL_MILLIS,
        _ => true,
    }
}

/// Honeypot first, then the time trap.
pub fn screen(lead: &LeadRequest, now_ms: f64) -> Screening {
    if honeypot_tripped(lead.company.as_deref()) {
        return Screening::Honeypot;
    }
    if time_trap_tripped(lead.ts, now_ms) {
        return Screening::TooFast;
    }
    Screening::Accept
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: f64 = 1_760_000_000_000.0;

    fn lead(company: Option<&str>, ts: Option<f64>) -> LeadRequest {
        LeadRequest {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: Some("(954) 444-4803".into()),
            company: company.map(str::to_string),
            ts,
        }
    }

    #[test]
    fn filled_honeypot_is_caught() {
        assert_eq!(screen(&lead(Some("x"), Some(NOW - 5000.0)), NOW), Screening::Honeypot);
    }

    #[test]
    fn blank_honeypot_is_ignored() {
        assert!(!honeypot_tripped(Some("   ")));
        assert!(!honeypot_tripped(Some("")));
        assert!(!honeypot_tripped(None));
    }

    #[test]
    fn time_trap_boundary() {
        assert_eq!(screen(&lead(None, Some(NOW - 1199.0)), NOW), Screening::TooFast);
        assert_eq!(screen(&lead(None, Some(NOW - 1200.0)), NOW), Screening::Accept);
        assert_eq!(screen(&lead(Some(""), Some(NOW - 2000.0)), NOW), Screening::Accept);
    }

    #[test]
    fn missing_timestamp_counts_as_too_fast() {
        assert_eq!(screen(&lead(None, None), NOW), Screening::TooFast);
        assert!(!Screening::TooFast.is_accepted());
    }

    #[test]
    fn non_positive_timestamp_counts_as_too_fast() {
        assert_eq!(screen(&lead(None, Some(0.0)), NOW), Screening::TooFast);
        assert_eq!(screen(&lead(None, Some(-5000.0)), NOW), Screening::TooFast);
        assert!(time_trap_tripped(Some(f64::NAN), NOW));
    }
}
