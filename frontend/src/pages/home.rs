use yew::prelude::*;

use crate::components::approach::Approach;
use crate::components::carousel::{Carousel, Slide};
use crate::components::connect::Connect;
use crate::components::contact_modal::ModalHandle;
use crate::Route;

fn slides() -> Vec<Slide> {
    vec![
        Slide {
            image: "/slider/South-Beach-Living-Interior-Design.jpg",
            title: Some("South Beach Living"),
            description: Some("Stunning sunset over the ocean waves"),
            link: Some(("Explore Now", Route::ProjectDetail { slug: "south-beach".into() })),
        },
        Slide {
            image: "/slider/aventura-interior-design.jpg",
            title: Some("Aventura"),
            description: Some("Sunlit luxury meets serene modern design"),
            link: Some((
                "Explore Now",
                Route::ProjectDetail { slug: "aventura-modern-living".into() },
            )),
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub modal: ModalHandle,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <>
            <Carousel items={slides()} />

            <section class="intro">
                <div class="intro-text">
                    <h1>{"Architectural & Interior Design Firm"}</h1>
                    <p>
                        {"Sarvian Design is an award-winning architecture and interior design firm in Fort Lauderdale, \
                          serving clients throughout South Florida. By blending striking architectural forms with \
                          thoughtfully curated interiors, we create homes that flow effortlessly between indoor and \
                          outdoor spaces, uniting nature and design into one harmonious living experience."}
                    </p>
                </div>
                <div class="intro-image">
                    <img src="/assets/about-us-top.jpg" alt="Home image" width="900" height="400" />
                </div>
            </section>

            <section class="methodology">
                <Approach />
            </section>

            <Connect modal={props.modal.clone()} />

            <style>{r#"
                .intro {
                    min-height: 100vh;
                    max-width: 1800px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 3fr;
                    gap: 3rem;
                    align-items: center;
                    padding: 0 1rem;
                }
                .intro-text h1 { font-size: 3rem; margin-bottom: 1.5rem; }
                .intro-text p { font-size: 1.125rem; line-height: 1.75; }
                .intro-image { padding: 20px; }
                .intro-image img { width: 100%; height: auto; object-fit: cover; }
                .methodology { min-height: 100vh; }
                @media (max-width: 1024px) {
                    .intro { grid-template-columns: 1fr; }
                }
            "#}</style>
        </>
    }
}
