use gloo_net::http::Request;
use log::{error, info};
use sarvian_common::project::ImageRef;
use sarvian_common::Project;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::contact_modal::ModalHandle;
use crate::components::rich_text::RichText;
use crate::config;

#[derive(Clone, PartialEq)]
enum Load {
    Loading,
    Loaded(Box<Project>),
    NotFound,
    Failed,
}

/// Sanity image CDN transform for a fixed crop.
fn sized_image(url: &str, width: u32, height: u32) -> String {
    format!("{}?w={}&h={}&fit=crop&auto=format", url, width, height)
}

/// Upper-cases the first letter of every word, like CSS `capitalize`.
fn capitalize_words(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn fact(label: &'static str, value: String) -> Html {
    html! {
        <div class="project-fact">
            <dt><h2>{label}</h2></dt>
            <dd>{value}</dd>
        </div>
    }
}

fn gallery_image(index: usize, image: &ImageRef) -> Html {
    let Some(url) = image.url() else {
        return html! {};
    };
    let alt = image
        .alt
        .clone()
        .unwrap_or_else(|| format!("Project image {}", index + 1));
    html! {
        <div class="project-gallery-item">
            <img src={sized_image(url, 1200, 900)} alt={alt} loading="lazy" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub slug: String,
    pub modal: ModalHandle,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let load = use_state(|| Load::Loading);

    {
        let load = load.clone();
        use_effect_with_deps(
            move |slug: &String| {
                load.set(Load::Loading);
                let url = config::api_url(&format!("/api/projects/{}", urlencoding::encode(slug)));
                let slug = slug.clone();
                spawn_local(async move {
                    let next = match Request::get(&url).send().await {
                        Ok(response) if response.status() == 404 => {
                            info!("Project {} not found", slug);
                            Load::NotFound
                        }
                        Ok(response) if response.ok() => match response.json::<Project>().await {
                            Ok(project) => Load::Loaded(Box::new(project)),
                            Err(e) => {
                                error!("Failed to parse project: {:?}", e);
                                Load::Failed
                            }
                        },
                        Ok(response) => {
                            error!("Project request failed with status {}", response.status());
                            Load::Failed
                        }
                        Err(e) => {
                            error!("Failed to fetch project: {:?}", e);
                            Load::Failed
                        }
                    };
                    load.set(next);
                });
                || ()
            },
            props.slug.clone(),
        );
    }

    let project = match &*load {
        Load::Loading => return html! { <main class="project-status"><p>{"Loading…"}</p></main> },
        Load::NotFound => {
            return html! {
                <main class="project-status">
                    <h1>{"Project not found"}</h1>
                    <p>{"The project you're looking for doesn't exist or has been removed."}</p>
                </main>
            };
        }
        Load::Failed => {
            return html! {
                <main class="project-status">
                    <p>{"We couldn't load this project right now. Please try again shortly."}</p>
                </main>
            }
        }
        Load::Loaded(project) => project,
    };

    let banner = project.banner().and_then(|hero| {
        hero.url().map(|url| {
            let alt = hero.alt.clone().unwrap_or_else(|| project.title.clone());
            html! {
                <section class="project-banner">
                    <img src={sized_image(url, 2400, 1400)} alt={alt} fetchpriority="high" />
                </section>
            }
        })
    });
    let rich = project.rich_text();

    html! {
        <main class="project-detail">
            { for banner }
            <section class="project-layout">
                <aside class="project-info">
                    <div class="project-card">
                        <h1>{project.title.clone()}</h1>
                        if let Some(location) = &project.location {
                            <p class="project-location">{location.clone()}</p>
                        }
                        <dl class="project-facts">
                            { fact("Firm", config::STUDIO_NAME.to_string()) }
                            if let Some(kind) = &project.kind {
                                { fact("Type", capitalize_words(kind)) }
                            }
                            if let Some(size) = &project.size {
                                { fact("Size", size.display()) }
                            }
                            if let Some(year) = project.year {
                                { fact("Year", year.to_string()) }
                            }
                        </dl>
                        if let Some(intro) = &project.intro {
                            <p class="project-intro">{intro.clone()}</p>
                        }
                        if !rich.is_empty() {
                            <RichText blocks={rich.to_vec()} />
                        }
                        <button class="button project-cta" onclick={props.modal.open_on_click()}>
                            {"Start a Similar Project"}
                        </button>
                    </div>
                </aside>
                <div class="project-gallery">
                    { for project.gallery().iter().enumerate().map(|(i, image)| gallery_image(i, image)) }
                </div>
            </section>
            <style>{r#"
                .project-status { max-width: 960px; margin: 6rem auto; padding: 0 1rem; text-align: center; }
                .project-banner { position: relative; height: 70vh; overflow: hidden; }
                .project-banner img { width: 100%; height: 100%; object-fit: cover; }
                .project-layout { display: grid; grid-template-columns: repeat(12, 1fr); gap: 2rem; margin-top: 1.5rem; }
                .project-info { grid-column: span 4; position: relative; z-index: 10; margin-top: -10rem; }
                .project-card { position: sticky; top: 6rem; padding: 3rem; color: #fff; background: rgba(60, 72, 80, 0.55); backdrop-filter: blur(12px); }
                .project-card h1 { font-size: 1.875rem; font-weight: 600; }
                .project-location { font-size: 0.875rem; opacity: 0.8; }
                .project-facts { margin-top: 2.5rem; font-size: 0.875rem; }
                .project-fact { display: flex; justify-content: space-between; padding-bottom: 0.5rem; margin-bottom: 0.5rem; border-bottom: 1px solid rgba(255, 255, 255, 0.15); }
                .project-fact h2 { font-size: inherit; font-weight: 500; opacity: 0.8; }
                .project-intro { margin-top: 4rem; font-size: 0.875rem; line-height: 1.5rem; }
                .project-cta { width: 100%; margin-top: 4rem; }
                .project-gallery { grid-column: span 8; display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
                .project-gallery-item { aspect-ratio: 4 / 3; overflow: hidden; }
                .project-gallery-item img { width: 100%; height: 100%; object-fit: cover; }
                @media (max-width: 1024px) {
                    .project-info, .project-gallery { grid-column: span 12; margin-top: 0; }
                    .project-gallery { grid-template-columns: 1fr; }
                }
            "#}</style>
        </main>
    }
}
