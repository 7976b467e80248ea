use yew::prelude::*;

const SLICES: [(&str, &str, &str); 4] = [
    ("/assets/1-short.jpg", "Sarvian design showcase - elegant interior design elements", "550px"),
    ("/assets/2-short.jpg", "Sarvian design showcase - sophisticated living space", "830px"),
    ("/assets/3-short.jpg", "Sarvian design showcase - luxury interior details", "1098px"),
    ("/assets/4-short.jpg", "Sarvian design showcase - refined architectural elements", "940px"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <main class="about-page">
            <section class="about-hero">
                <div class="about-slices">
                    { for SLICES.iter().map(|(src, alt, height)| html! {
                        <div class="about-slice" style={format!("height: {};", height)}>
                            <img src={*src} alt={*alt} />
                        </div>
                    }) }
                </div>
                <div class="about-overlay">
                    <h2>{"ABOUT"}</h2>
                    <h3>{"SARVIAN"}</h3>
                    <p>{"Our family's dedication to this noble material reflects a deep respect for its history and potential."}</p>
                </div>
            </section>
            <style>{r#"
                .about-hero { position: relative; max-width: 1600px; margin: 0 auto; }
                .about-slices { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; padding: 2.5rem 1.25rem; }
                .about-slice { position: relative; overflow: hidden; }
                .about-slice img { width: 100%; height: 100%; object-fit: cover; }
                .about-overlay { position: absolute; bottom: 7.5rem; left: 2.5rem; max-width: 32rem; }
                .about-overlay h2 { font-size: 3.75rem; line-height: 1.1; }
                .about-overlay h3 { font-size: 6rem; font-weight: 800; margin-left: 2.5rem; }
                .about-overlay p { margin-top: 1rem; font-size: 1.125rem; opacity: 0.8; }
                @media (max-width: 768px) {
                    .about-slices { grid-template-columns: 1fr; }
                    .about-slice { height: 300px !important; }
                }
            "#}</style>
        </main>
    }
}
