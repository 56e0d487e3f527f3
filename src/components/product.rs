// components/product.rs - Product carousel and cards
//
// The carousel shows one RenderGroup (up to three products) per slide,
// stepping through the groups from the projection. The Buy Now / See More
// affordances are presentational only.

use leptos::prelude::*;

use crate::model::Product;
use crate::projection::CarouselModel;

/// One product tile.
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let price_display = format!("${:.2}", product.price);

    view! {
        <div class="col-lg-4 col-sm-4">
            <div class="box_main">
                <h4 class="shirt_text">{product.title.clone()}</h4>
                <p class="price_text">"Price " <span>{price_display}</span></p>
                <div class="tshirt_img">
                    <img src=product.image.clone() alt=product.title.clone() />
                </div>
                <div class="btn_main">
                    <div class="buy_bt">
                        <a href="/">"Buy Now"</a>
                    </div>
                    <div class="seemore_bt">
                        <a href="/">"See More"</a>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Carousel over the projected product groups.
///
/// Keeps a local slide index; the index is clamped against the current
/// group count so re-filtering to a shorter list can never point past the
/// end. An empty model renders a single "No Products Found" slide.
#[component]
pub fn ProductCarousel(
    /// Projected groups of at most 3 products
    model: Signal<CarouselModel>,
    /// Section heading ("<Category> Fashion" or the default)
    heading: Signal<String>,
) -> impl IntoView {
    let active_slide = RwSignal::new(0_usize);

    let slide_count = move || model.get().groups.len();
    let current_slide = move || active_slide.get().min(slide_count().saturating_sub(1));

    let current_group = move || {
        let model = model.get();
        model.groups.get(current_slide()).cloned().unwrap_or_default()
    };

    let go_prev = move |_| {
        active_slide.set(current_slide().saturating_sub(1));
    };
    let go_next = move |_| {
        let last = slide_count().saturating_sub(1);
        active_slide.set((current_slide() + 1).min(last));
    };

    view! {
        <div class="fashion_section">
            <Show
                when=move || !model.get().is_empty()
                fallback=|| view! {
                    <div class="container">
                        <h1 class="fashion_taital">"No Products Found"</h1>
                    </div>
                }
            >
                <div class="container">
                    <h1 class="fashion_taital">{move || heading.get()}</h1>
                    <div class="fashion_section_2">
                        <div class="row">
                            <For
                                each=move || current_group()
                                key=|product| product.id
                                children=move |product| {
                                    view! { <ProductCard product=product /> }
                                }
                            />
                        </div>
                    </div>
                    <div class="carousel_controls">
                        <button
                            type="button"
                            class="carousel_bt"
                            disabled=move || current_slide() == 0
                            on:click=go_prev
                        >
                            "‹"
                        </button>
                        <span class="carousel_position">
                            {move || current_slide() + 1} " / " {slide_count}
                        </span>
                        <button
                            type="button"
                            class="carousel_bt"
                            disabled=move || current_slide() + 1 >= slide_count()
                            on:click=go_next
                        >
                            "›"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Product;
    use crate::projection::{project, CarouselModel};

    fn product(id: u32, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 15.0,
            image: String::new(),
            category: "clothing".to_string(),
        }
    }

    #[test]
    fn test_price_formatting() {
        let price_display = format!("${:.2}", 109.95_f64);
        assert_eq!(price_display, "$109.95");
        let price_display = format!("${:.2}", 7.0_f64);
        assert_eq!(price_display, "$7.00");
    }

    #[test]
    fn test_slide_index_clamped_when_groups_shrink() {
        // The logic behind current_slide(): an index left over from a
        // longer list must clamp to the last available slide.
        let model = project(&[product(1, "Shirt"), product(2, "Ring")], "");
        let stale_index = 4_usize;
        let clamped = stale_index.min(model.groups.len().saturating_sub(1));
        assert_eq!(clamped, 0);
    }

    #[test]
    fn test_empty_model_has_no_slides() {
        let model = CarouselModel::default();
        assert!(model.is_empty());
        assert_eq!(model.groups.len().saturating_sub(1), 0);
    }
}
