use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{api, router::Route, routes::page_state},
    model::{
        business::Currency,
        catalog::{CategoryDto, ItemDto},
        menu::PublicMenuDto,
        view::PageState,
    },
};

/// Published menu reached by alias, rendered without the site chrome.
#[component]
pub fn PublicMenu(alias: String) -> Element {
    rsx!(PublicMenuContent { key: "{alias}", alias })
}

#[component]
fn PublicMenuContent(alias: String) -> Element {
    let fetch_alias = alias.clone();
    let menu = use_resource(move || {
        let alias = fetch_alias.clone();
        async move { api::menu::get_public_menu(&alias).await }
    });

    let state = page_state(Option::as_ref(&*menu.read()), PageState::Populated);

    match state {
        PageState::Populated(menu) => rsx!(MenuView { menu }),
        PageState::NotFound => rsx!(MenuNotFound {}),
        PageState::Failed(message) => rsx!(
            div { class: "min-h-screen flex items-center justify-center",
                p { class: "text-error", "{message}" }
            }
        ),
        PageState::Loading | PageState::Empty => rsx!(
            div { class: "min-h-screen flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        ),
    }
}

#[component]
fn MenuView(menu: PublicMenuDto) -> Element {
    let mut active = use_signal(|| menu.catalog.first_category_id());

    let business = &menu.business;
    let catalog = &menu.catalog;
    let visible: Vec<CategoryDto> = catalog.visible_categories().cloned().collect();
    let hero = business.business_type.hero_image();

    let mut select_category = move |category_id: i32| {
        active.set(Some(category_id));
        let _ = document::eval(&format!(
            "document.getElementById('category-{}')?.scrollIntoView({{ behavior: 'smooth', block: 'start' }})",
            category_id
        ));
    };

    rsx!(
        Title { "{business.name} | Menu" }
        Meta {
            name: "description",
            content: "Menu of {business.name}"
        }
        div { class: "min-h-screen bg-base-100",
            header {
                class: "hero min-h-64",
                style: "background-image: url({hero});",
                div { class: "hero-overlay" }
                div { class: "hero-content text-neutral-content text-center flex-col",
                    h1 { class: "text-4xl font-bold", "{business.name}" }
                    if !business.address.is_empty() {
                        p { "{business.address}" }
                    }
                    div { class: "flex flex-wrap justify-center gap-4",
                        if let Some(phone) = business.phone.as_ref() {
                            a { class: "link", href: "tel:{phone}", "{phone}" }
                        }
                        if let Some(email) = business.email.as_ref() {
                            a { class: "link", href: "mailto:{email}", "{email}" }
                        }
                    }
                }
            }
            if !catalog.categories.is_empty() {
                nav { class: "sticky top-0 z-10 bg-base-100 p-2 flex gap-2 overflow-x-auto",
                    for category in catalog.categories.iter() {
                        CategoryPill {
                            key: "{category.id}",
                            category: category.clone(),
                            active: active() == Some(category.id),
                            on_select: move |category_id| select_category(category_id),
                        }
                    }
                }
            }
            if visible.is_empty() {
                p { class: "text-center opacity-70 p-12", "This menu has no items yet." }
            } else {
                main { class: "max-w-3xl mx-auto p-4 flex flex-col gap-8",
                    for category in visible.iter() {
                        CategoryBlock {
                            key: "{category.id}",
                            category: category.clone(),
                            items: catalog.items_in(category.id).cloned().collect::<Vec<_>>(),
                            currency: business.currency,
                            dimmed: active().is_some_and(|id| id != category.id),
                        }
                    }
                }
            }
            footer { class: "text-center text-sm opacity-70 p-6",
                Link { to: Route::Home {}, "Menu by Menuboard" }
            }
        }
    )
}

#[component]
fn CategoryPill(category: CategoryDto, active: bool, on_select: EventHandler<i32>) -> Element {
    let category_id = category.id;

    rsx!(
        button {
            class: if active { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" },
            onclick: move |_| on_select.call(category_id),
            "{category.name}"
        }
    )
}

#[component]
fn CategoryBlock(
    category: CategoryDto,
    items: Vec<ItemDto>,
    currency: Currency,
    dimmed: bool,
) -> Element {
    rsx!(
        section {
            id: "category-{category.id}",
            class: if dimmed { "transition-opacity opacity-40" } else { "transition-opacity" },
            h2 { class: "text-2xl font-bold", "{category.name}" }
            if let Some(description) = category.description.as_ref() {
                p { class: "opacity-70", "{description}" }
            }
            ul { class: "divide-y divide-base-300 mt-2",
                for item in items.iter() {
                    li { key: "{item.id}", class: "py-3 flex justify-between gap-4",
                        div {
                            p { class: "font-semibold", "{item.name}" }
                            if let Some(description) = item.description.as_ref() {
                                p { class: "text-sm opacity-70", "{description}" }
                            }
                        }
                        span { class: "font-mono whitespace-nowrap", "{currency.format_price(item.price)}" }
                    }
                }
            }
        }
    )
}

#[component]
fn MenuNotFound() -> Element {
    rsx!(
        Title { "Menu not found | Menuboard" }
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4",
            h1 { class: "text-3xl font-bold", "Menu not found" }
            p { "There is no menu at this address." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Go to Menuboard" }
        }
    )
}
