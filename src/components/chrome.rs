// components/chrome.rs - Static marketing and navigation chrome
//
// Inert presentation: top menu, logo, side navigation, language/cart/user
// links, and the hero banner. Nothing here touches catalog state; the only
// behavior is opening and closing the sidenav.

use leptos::prelude::*;

/// Top menu strip with marketing links.
#[component]
pub fn TopMenu() -> impl IntoView {
    let links = [
        "Best Sellers",
        "Gift Ideas",
        "New Releases",
        "Today's Deals",
        "Customer Service",
    ];

    view! {
        <div class="header_section_top">
            <div class="custom_menu">
                <ul>
                    {links
                        .into_iter()
                        .map(|label| view! { <li><a href="/">{label}</a></li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

/// Logo row.
#[component]
pub fn LogoSection() -> impl IntoView {
    view! {
        <div class="logo_section">
            <div class="logo">
                <a href="/">
                    <img src="images/logo.png" alt="Logo" />
                </a>
            </div>
        </div>
    }
}

/// Slide-out side navigation with its toggle icon.
#[component]
pub fn SideNav() -> impl IntoView {
    let width = RwSignal::new(0_u32);

    let open = move |_| width.set(250);
    let close = move |_| width.set(0);

    view! {
        <div id="mySidenav" class="sidenav" style:width=move || format!("{}px", width.get())>
            <button class="closebtn" on:click=close>
                "×"
            </button>
            <a href="/">"Home"</a>
            <a href="/">"Fashion"</a>
            <a href="/">"Electronic"</a>
            <a href="/">"Jewellery"</a>
        </div>
        <span class="toggle_icon" on:click=open>
            <img src="images/toggle-icon.png" alt="Toggle Menu" />
        </span>
    }
}

/// Language selector, cart, and user links.
#[component]
pub fn HeaderExtras() -> impl IntoView {
    view! {
        <div class="header_box">
            <div class="lang_box">
                <a href="/" title="Language" class="nav-link">
                    <img src="images/flag-uk.png" alt="flag" title="United Kingdom" />
                    " English"
                </a>
            </div>
            <div class="login_menu">
                <ul>
                    <li>
                        <a href="/">
                            <i class="fa fa-shopping-cart"></i>
                            <span class="padding_10">"Cart"</span>
                        </a>
                    </li>
                    <li>
                        <a href="/">
                            <i class="fa fa-user"></i>
                            <span class="padding_10">"User"</span>
                        </a>
                    </li>
                </ul>
            </div>
        </div>
    }
}

/// Static hero banner above the product section.
#[component]
pub fn HeroBanner() -> impl IntoView {
    view! {
        <div class="banner_section">
            <div class="container">
                <h1 class="banner_taital">"Get Start" <br /> "Your favorite shopping"</h1>
                <div class="buynow_bt">
                    <a href="/">"Buy Now"</a>
                </div>
            </div>
        </div>
    }
}
