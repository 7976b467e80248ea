use serde::{Deserialize, Deserializer, Serialize};

/// The store does not enforce required fields, so drafts and old documents
/// can carry a null title. Those read as empty instead of failing the batch.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One card on the projects listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSlug {
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub size: Option<ProjectSize>,
    #[serde(rename = "heroImage", default)]
    pub hero_image: Option<ImageRef>,
    #[serde(rename = "mainImage", default)]
    pub main_image: Option<ImageRef>,
    #[serde(default)]
    pub gallery: Option<Vec<ImageRef>>,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub description: Option<Vec<TextBlock>>,
    #[serde(default)]
    pub body: Option<Vec<TextBlock>>,
}

impl Project {
    /// The banner prefers the hero image and falls back to the main image.
    pub fn banner(&self) -> Option<&ImageRef> {
        self.hero_image.as_ref().or(self.main_image.as_ref())
    }

    pub fn rich_text(&self) -> &[TextBlock] {
        self.description
            .as_deref()
            .or(self.body.as_deref())
            .unwrap_or(&[])
    }

    pub fn gallery(&self) -> &[ImageRef] {
        self.gallery.as_deref().unwrap_or(&[])
    }
}

/// Editors have stored both numbers and free text in `size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectSize {
    SquareFeet(f64),
    Text(String),
}

impl ProjectSize {
    pub fn display(&self) -> String {
        match self {
            ProjectSize::SquareFeet(n) => format!("{} Sq Ft", group_thousands(*n)),
            ProjectSize::Text(s) => s.clone(),
        }
    }
}

fn group_thousands(n: f64) -> String {
    let rounded = n.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0 {
        out.insert(0, '-');
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub asset: Option<ImageAsset>,
}

impl ImageRef {
    pub fn url(&self) -> Option<&str> {
        self.asset.as_ref().map(|a| a.url.as_str())
    }

    pub fn dimensions(&self) -> Option<&Dimensions> {
        self.asset
            .as_ref()
            .and_then(|a| a.metadata.as_ref())
            .and_then(|m| m.dimensions.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub url: String,
    #[serde(default)]
    pub metadata: Option<ImageMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    #[serde(rename = "aspectRatio", default)]
    pub aspect_ratio: Option<f64>,
}

/// A portable-text block. Only plain blocks are rendered; anything else is
/// skipped by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(rename = "_type", default)]
    pub kind: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(rename = "listItem", default)]
    pub list_item: Option<String>,
    #[serde(default)]
    pub children: Vec<TextSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_renders_numbers_with_separators() {
        assert_eq!(ProjectSize::SquareFeet(4200.0).display(), "4,200 Sq Ft");
        assert_eq!(ProjectSize::SquareFeet(950.0).display(), "950 Sq Ft");
        assert_eq!(ProjectSize::SquareFeet(1_250_000.0).display(), "1,250,000 Sq Ft");
        assert_eq!(ProjectSize::Text("Approx. 3 acres".into()).display(), "Approx. 3 acres");
    }

    #[test]
    fn size_accepts_number_or_text() {
        let n: ProjectSize = serde_json::from_str("3100").unwrap();
        assert_eq!(n, ProjectSize::SquareFeet(3100.0));
        let s: ProjectSize = serde_json::from_str("\"3,100 sf\"").unwrap();
        assert_eq!(s, ProjectSize::Text("3,100 sf".into()));
    }

    #[test]
    fn banner_and_rich_text_fallbacks() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "title": "Aventura Modern Living",
            "mainImage": { "alt": "Living room", "asset": { "url": "https://cdn.example/main.jpg" } },
            "body": [{ "_type": "block", "style": "normal", "children": [{ "text": "Open plan." }] }]
        }))
        .unwrap();
        assert_eq!(project.banner().and_then(ImageRef::url), Some("https://cdn.example/main.jpg"));
        assert_eq!(project.rich_text().len(), 1);
        assert!(project.gallery().is_empty());
    }

    #[test]
    fn null_or_missing_title_reads_as_empty() {
        let cards: Vec<ProjectSummary> = serde_json::from_value(serde_json::json!([
            { "_id": "a", "title": "Aventura", "slug": "aventura-modern-living" },
            { "_id": "drafts.b", "title": null, "slug": "south-beach" },
            { "_id": "c" }
        ]))
        .unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].title, "Aventura");
        assert_eq!(cards[1].title, "");
        assert_eq!(cards[2].title, "");

        let project: Project =
            serde_json::from_value(serde_json::json!({ "_id": "d", "title": null })).unwrap();
        assert_eq!(project.title, "");
    }

    #[test]
    fn description_wins_over_body() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "_id": "p2",
            "title": "South Beach",
            "heroImage": { "asset": { "url": "https://cdn.example/hero.jpg",
                "metadata": { "dimensions": { "width": 2400, "height": 1400, "aspectRatio": 1.71 } } } },
            "mainImage": { "asset": { "url": "https://cdn.example/main.jpg" } },
            "description": [{ "_type": "block", "children": [{ "text": "A" }] }, { "_type": "block", "children": [] }],
            "body": [{ "_type": "block", "children": [{ "text": "B" }] }]
        }))
        .unwrap();
        assert_eq!(project.rich_text().len(), 2);
        assert_eq!(project.banner().and_then(ImageRef::url), Some("https://cdn.example/hero.jpg"));
        assert_eq!(project.banner().and_then(ImageRef::dimensions).map(|d| d.width), Some(2400.0));
    }
}
