use chrono::Datelike;
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <img src="/logo.png" alt={config::STUDIO_NAME} width="200" />
                <p>{"Architecture and interior design firm."}</p>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, config::STUDIO_NAME)}</p>
            </div>
            <style>{r#"
                .site-footer { margin-top: 8rem; background: var(--footer, #1c1a18); color: #fff; }
                .footer-brand { padding: 2rem 0; text-align: center; }
                .footer-brand img { filter: brightness(0) invert(1); }
                .footer-brand p { margin-top: 0.75rem; font-size: 0.875rem; }
                .footer-bottom { border-top: 1px solid #333; padding: 1rem 0; text-align: center; font-size: 0.9rem; }
            "#}</style>
        </footer>
    }
}
