use gloo_net::http::Request;
use log::{error, info};
use sarvian_common::ProjectSummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

/// Project listing. A failed fetch renders the same empty grid the backend
/// returns when the content store is down.
#[function_component(Projects)]
pub fn projects() -> Html {
    let projects = use_state(Vec::<ProjectSummary>::new);

    {
        let projects = projects.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match Request::get(&config::api_url("/api/projects")).send().await {
                        Ok(response) if response.ok() => {
                            match response.json::<Vec<ProjectSummary>>().await {
                                Ok(list) => {
                                    info!("Loaded {} projects", list.len());
                                    projects.set(list);
                                }
                                Err(e) => error!("Failed to parse projects: {:?}", e),
                            }
                        }
                        Ok(response) => error!("Projects request failed with status {}", response.status()),
                        Err(e) => error!("Failed to fetch projects: {:?}", e),
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <main class="projects-page">
            <h1>{"Our Projects"}</h1>
            <div class="projects-grid">
                { for projects.iter().filter_map(|p| {
                    let slug = p.slug.clone()?;
                    let location = p.location.clone().unwrap_or_default();
                    Some(html! {
                        <Link<Route> to={Route::ProjectDetail { slug }} classes="project-tile">
                            <div class="project-tile-frame" aria-label={format!("{} - {}", p.title, location)}>
                                if let Some(url) = p.image_url.clone() {
                                    <img src={url} alt={p.title.clone()} />
                                }
                                <div class="project-tile-overlay">
                                    <h2>{p.title.clone()}</h2>
                                    <p>{location}</p>
                                </div>
                            </div>
                        </Link<Route>>
                    })
                }) }
            </div>
            <style>{r#"
                .projects-page { max-width: 1400px; margin: 0 auto; padding: 3rem 1rem; }
                .projects-page h1 { font-size: 1.875rem; font-weight: 600; margin-bottom: 2rem; }
                .projects-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }
                .project-tile { display: block; overflow: hidden; }
                .project-tile-frame { position: relative; aspect-ratio: 4 / 3; }
                .project-tile-frame img { width: 100%; height: 100%; object-fit: cover; transition: transform 500ms; }
                .project-tile:hover img { transform: scale(1.05); }
                .project-tile-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    opacity: 0;
                    background: rgba(60, 72, 80, 0.55);
                    backdrop-filter: blur(12px);
                    transition: opacity 300ms;
                }
                .project-tile:hover .project-tile-overlay { opacity: 1; }
                @media (max-width: 768px) {
                    .projects-grid { grid-template-columns: 1fr; }
                }
            "#}</style>
        </main>
    }
}
