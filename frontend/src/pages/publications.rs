use yew::prelude::*;

#[function_component(Publications)]
pub fn publications() -> Html {
    html! {
        <main class="simple-page">
            <h1>{"Publications"}</h1>
            <p>{"Explore our publications below."}</p>
        </main>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="simple-page">
            <h1>{"Page not found"}</h1>
            <p>{"The page you requested could not be found."}</p>
        </main>
    }
}
