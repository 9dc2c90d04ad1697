use dioxus::prelude::*;

use crate::{
    client::{
        api,
        components::{CategoryForm, ConfirmationModal, ItemForm, SaveFuture},
        routes::page_state,
    },
    model::{
        business::Currency,
        catalog::{CategoryDto, CategoryFormDto, ItemDto, ItemFormDto},
        view::{ModalState, PageState},
    },
};

#[derive(Clone, Debug, PartialEq)]
enum PendingDelete {
    Category(CategoryDto),
    Item(ItemDto),
}

/// Categories and items of one business with their create, edit, and delete modals.
#[component]
pub fn CatalogSection(business_id: i32, currency: Currency) -> Element {
    let mut catalog =
        use_resource(move || async move { api::catalog::get_catalog(business_id).await });
    let mut category_modal = use_signal(ModalState::<CategoryDto>::default);
    let mut item_modal = use_signal(ModalState::<ItemDto>::default);
    let mut pending_delete = use_signal(|| None::<PendingDelete>);

    let save_category = move |payload: CategoryFormDto| -> SaveFuture {
        let target = category_modal.read().target().map(|c| c.id);
        Box::pin(async move {
            match target {
                Some(category_id) => {
                    api::catalog::update_category(business_id, category_id, &payload).await?;
                }
                None => {
                    api::catalog::create_category(business_id, &payload).await?;
                }
            }
            catalog.restart();
            Ok(())
        })
    };

    let save_item = move |payload: ItemFormDto| -> SaveFuture {
        let target = item_modal.read().target().map(|i| i.id);
        Box::pin(async move {
            match target {
                Some(item_id) => {
                    api::catalog::update_item(business_id, item_id, &payload).await?;
                }
                None => {
                    api::catalog::create_item(business_id, &payload).await?;
                }
            }
            catalog.restart();
            Ok(())
        })
    };

    let confirm_delete = move |_: ()| -> SaveFuture {
        let target = pending_delete();
        Box::pin(async move {
            match target {
                Some(PendingDelete::Category(category)) => {
                    api::catalog::delete_category(business_id, category.id).await?
                }
                Some(PendingDelete::Item(item)) => {
                    api::catalog::delete_item(business_id, item.id).await?
                }
                None => return Ok(()),
            }
            catalog.restart();
            Ok(())
        })
    };

    let state = page_state(Option::as_ref(&*catalog.read()), PageState::Populated);
    let data = match state {
        PageState::Populated(data) => data,
        PageState::Failed(message) => {
            return rsx!(
                p { class: "text-error", "{message}" }
            )
        }
        PageState::NotFound => return rsx!(),
        PageState::Loading | PageState::Empty => {
            return rsx!(
                div { class: "skeleton h-48 w-full" }
            )
        }
    };

    let can_add_item = data.can_add_item();
    let categories = data.categories.clone();

    rsx!(
        section { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                div { class: "flex items-center justify-between",
                    h2 { class: "card-title", "Categories" }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| category_modal.write().open_create(),
                        "Add category"
                    }
                }
                if data.categories.is_empty() {
                    p { class: "opacity-70", "No categories yet. Items are filed under categories, add one first." }
                }
                ul { class: "flex flex-col gap-2",
                    for category in data.categories.iter() {
                        CategoryRow {
                            key: "{category.id}",
                            category: category.clone(),
                            on_edit: move |category| category_modal.write().open_edit(category),
                            on_delete: move |category| pending_delete.set(Some(PendingDelete::Category(category))),
                        }
                    }
                }
            }
        }
        section { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                div { class: "flex items-center justify-between",
                    h2 { class: "card-title", "Items" }
                    button {
                        class: "btn btn-primary btn-sm",
                        disabled: !can_add_item,
                        title: if can_add_item { "" } else { "Add a category first" },
                        onclick: move |_| item_modal.write().open_create(),
                        "Add item"
                    }
                }
                for category in data.categories.iter() {
                    ItemGroup {
                        key: "{category.id}",
                        category: category.clone(),
                        items: data.items_in(category.id).cloned().collect::<Vec<_>>(),
                        currency,
                        on_edit: move |item| item_modal.write().open_edit(item),
                        on_delete: move |item| pending_delete.set(Some(PendingDelete::Item(item))),
                    }
                }
            }
        }
        if category_modal.read().is_open() {
            CategoryForm {
                target: category_modal.read().target().cloned(),
                on_save: save_category,
                on_close: move |_| category_modal.write().close(),
            }
        }
        if item_modal.read().is_open() {
            ItemForm {
                categories: categories.clone(),
                target: item_modal.read().target().cloned(),
                on_save: save_item,
                on_close: move |_| item_modal.write().close(),
            }
        }
        if let Some(pending) = pending_delete() {
            ConfirmationModal {
                title: match &pending {
                    PendingDelete::Category(_) => "Delete category".to_string(),
                    PendingDelete::Item(_) => "Delete item".to_string(),
                },
                message: match &pending {
                    PendingDelete::Category(category) => format!(
                        "Delete {} and every item in it? This cannot be undone.",
                        category.name
                    ),
                    PendingDelete::Item(item) => format!("Delete {}? This cannot be undone.", item.name),
                },
                confirm_text: "Delete",
                on_confirm: confirm_delete,
                on_close: move |_| pending_delete.set(None),
            }
        }
    )
}

#[component]
fn CategoryRow(
    category: CategoryDto,
    on_edit: EventHandler<CategoryDto>,
    on_delete: EventHandler<CategoryDto>,
) -> Element {
    let edit_target = category.clone();
    let delete_target = category.clone();

    rsx!(
        li { class: "flex items-center justify-between gap-2 p-2 rounded bg-base-100",
            div {
                p { class: "font-semibold", "{category.name}" }
                if let Some(description) = category.description.as_ref() {
                    p { class: "text-sm opacity-70", "{description}" }
                }
            }
            div { class: "flex gap-2",
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-error btn-outline btn-sm",
                    onclick: move |_| on_delete.call(delete_target.clone()),
                    "Delete"
                }
            }
        }
    )
}

#[component]
fn ItemGroup(
    category: CategoryDto,
    items: Vec<ItemDto>,
    currency: Currency,
    on_edit: EventHandler<ItemDto>,
    on_delete: EventHandler<ItemDto>,
) -> Element {
    rsx!(
        div { class: "flex flex-col gap-2",
            h3 { class: "font-semibold mt-2", "{category.name}" }
            if items.is_empty() {
                p { class: "text-sm opacity-70", "No items in this category" }
            }
            ul { class: "flex flex-col gap-2",
                for item in items.iter() {
                    ItemRow {
                        key: "{item.id}",
                        item: item.clone(),
                        currency,
                        on_edit,
                        on_delete,
                    }
                }
            }
        }
    )
}

#[component]
fn ItemRow(
    item: ItemDto,
    currency: Currency,
    on_edit: EventHandler<ItemDto>,
    on_delete: EventHandler<ItemDto>,
) -> Element {
    let edit_target = item.clone();
    let delete_target = item.clone();
    let price = currency.format_price(item.price);

    rsx!(
        li { class: "flex items-center justify-between gap-2 p-2 rounded bg-base-100",
            div {
                p { class: "font-semibold", "{item.name}" }
                if let Some(description) = item.description.as_ref() {
                    p { class: "text-sm opacity-70", "{description}" }
                }
            }
            div { class: "flex items-center gap-2",
                span { class: "font-mono", "{price}" }
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-error btn-outline btn-sm",
                    onclick: move |_| on_delete.call(delete_target.clone()),
                    "Delete"
                }
            }
        }
    )
}

