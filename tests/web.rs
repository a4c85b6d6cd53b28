#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use missiteam_site::components::animated_section::AnimatedSection;
use missiteam_site::components::footer::{Footer, FooterProps};
use missiteam_site::components::header::{Header, HeaderProps};
use missiteam_site::components::ui::{Button, ButtonVariant};
use missiteam_site::config;
use missiteam_site::scroll::scroll_to_anchor;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::js_sys::Reflect;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn append(tag: &str, style: &str) -> Element {
    let document = document();
    let element = document.create_element(tag).unwrap();
    element.set_attribute("style", style).unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn add_section(id: &str) -> Element {
    let section = append("section", "height: 200px;");
    section.set_id(id);
    section
}

fn scroll_top() {
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
}

fn reveal_style(root: &Element) -> String {
    root.query_selector(".reveal")
        .unwrap()
        .expect("reveal block rendered")
        .get_attribute("style")
        .unwrap_or_default()
}

#[function_component(RevealBlock)]
fn reveal_block() -> Html {
    html! {
        <AnimatedSection>
            <div style="height: 200px;">{"block"}</div>
        </AnimatedSection>
    }
}

#[wasm_bindgen_test]
fn unknown_anchor_is_a_no_op() {
    let window = web_sys::window().unwrap();
    let before = window.scroll_y().unwrap();

    assert!(!scroll_to_anchor("nonexistent", config::SCROLL_DURATION_MS, config::HEADER_OFFSET_PX));
    assert_eq!(window.scroll_y().unwrap(), before);
}

#[wasm_bindgen_test]
async fn contact_lands_under_header_within_duration() {
    let lead = append("div", "height: 3000px;");
    let contact = add_section(config::anchor::CONTACT);
    let tail = append("div", "height: 3000px;");
    scroll_top();

    assert!(scroll_to_anchor(config::anchor::CONTACT, config::SCROLL_DURATION_MS, config::HEADER_OFFSET_PX));

    TimeoutFuture::new(100).await;
    let mid_flight = contact.get_bounding_client_rect().top();
    assert!(mid_flight > config::HEADER_OFFSET_PX + 100.0, "arrived too early: {mid_flight}");

    TimeoutFuture::new(config::SCROLL_DURATION_MS + 150).await;
    let top = contact.get_bounding_client_rect().top();
    assert!((top - config::HEADER_OFFSET_PX).abs() <= 1.0, "contact top at {top}");

    for element in [lead, contact, tail] {
        element.remove();
    }
}

#[wasm_bindgen_test]
async fn target_moving_mid_scroll_is_still_reached() {
    let lead = append("div", "height: 2000px;");
    let target = add_section("moving-target");
    let tail = append("div", "height: 3000px;");
    scroll_top();

    assert!(scroll_to_anchor("moving-target", config::SCROLL_DURATION_MS, config::HEADER_OFFSET_PX));

    // Content above the target grows while the scroll is running.
    TimeoutFuture::new(100).await;
    lead.set_attribute("style", "height: 2800px;").unwrap();

    TimeoutFuture::new(config::SCROLL_DURATION_MS + 150).await;
    let top = target.get_bounding_client_rect().top();
    assert!((top - config::HEADER_OFFSET_PX).abs() <= 1.0, "target top at {top}");

    for element in [lead, target, tail] {
        element.remove();
    }
}

#[wasm_bindgen_test]
fn zero_duration_lands_immediately() {
    let document = document();
    let spacer = append("div", "height: 4000px;");
    let section = add_section("zero-duration-target");

    let window = web_sys::window().unwrap();
    scroll_top();
    let top = section.get_bounding_client_rect().top();

    assert!(scroll_to_anchor("zero-duration-target", 0, config::HEADER_OFFSET_PX));
    let expected = (top - config::HEADER_OFFSET_PX).max(0.0);
    let max_scroll = f64::from(document.document_element().unwrap().scroll_height())
        - window.inner_height().unwrap().as_f64().unwrap();
    let landed = window.scroll_y().unwrap();
    assert!((landed - expected.min(max_scroll)).abs() <= 1.0, "landed at {landed}, expected {expected}");

    section.remove();
    spacer.remove();
}

#[wasm_bindgen_test]
async fn block_is_shown_without_intersection_observer() {
    let window = web_sys::window().unwrap();
    let key = JsValue::from_str("IntersectionObserver");
    let original = Reflect::get(&window, &key).unwrap();
    Reflect::delete_property(&window, &key).unwrap();
    if Reflect::has(&window, &key).unwrap() {
        Reflect::set(&window, &key, &JsValue::UNDEFINED).unwrap();
    }

    let root = append("div", "");
    let app = yew::Renderer::<RevealBlock>::with_root(root.clone()).render();
    TimeoutFuture::new(50).await;
    let style = reveal_style(&root);

    Reflect::set(&window, &key, &original).unwrap();
    app.destroy();
    root.remove();

    assert!(style.starts_with("opacity: 1;"), "style was {style}");
}

#[wasm_bindgen_test]
async fn block_below_the_fold_reveals_once_and_stays() {
    scroll_top();
    let lead = append("div", "height: 3000px;");
    let root = append("div", "");
    let tail = append("div", "height: 3000px;");
    let app = yew::Renderer::<RevealBlock>::with_root(root.clone()).render();

    TimeoutFuture::new(150).await;
    assert!(reveal_style(&root).starts_with("opacity: 0;"));

    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 2800.0);
    TimeoutFuture::new(200).await;
    assert!(reveal_style(&root).starts_with("opacity: 1;"));

    // Out of view again: no replay, no revert.
    scroll_top();
    TimeoutFuture::new(200).await;
    assert!(reveal_style(&root).starts_with("opacity: 1;"));
    window.scroll_to_with_x_and_y(0.0, 2800.0);
    TimeoutFuture::new(200).await;
    assert!(reveal_style(&root).starts_with("opacity: 1;"));

    app.destroy();
    for element in [lead, root, tail] {
        element.remove();
    }
    scroll_top();
}

#[wasm_bindgen_test]
async fn empty_nav_renders_empty_lists() {
    let header_root = append("div", "");
    let footer_root = append("div", "");
    let header = yew::Renderer::<Header>::with_root_and_props(header_root.clone(), HeaderProps { items: &[] }).render();
    let footer = yew::Renderer::<Footer>::with_root_and_props(footer_root.clone(), FooterProps { items: &[] }).render();
    TimeoutFuture::new(20).await;

    let nav_links = header_root.query_selector(".nav-links").unwrap().expect("nav links rendered");
    assert_eq!(nav_links.child_element_count(), 0);
    assert!(header_root.query_selector(".mobile-menu").unwrap().is_none());

    let toggle: HtmlElement = header_root
        .query_selector(".menu-toggle")
        .unwrap()
        .expect("menu toggle rendered")
        .dyn_into()
        .unwrap();
    toggle.click();
    TimeoutFuture::new(20).await;

    let mobile_menu = header_root.query_selector(".mobile-menu").unwrap().expect("menu opened");
    assert_eq!(mobile_menu.child_element_count(), 0);
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));

    let footer_links = footer_root.query_selector(".footer-links").unwrap().expect("footer links rendered");
    assert_eq!(footer_links.child_element_count(), 0);

    header.destroy();
    footer.destroy();
    header_root.remove();
    footer_root.remove();
}

#[function_component(Buttons)]
fn buttons() -> Html {
    html! {
        <>
            <Button variant={ButtonVariant::Outline}>{"Learn More"}</Button>
            <Button kind="submit">{"Send Message"}</Button>
        </>
    }
}

#[wasm_bindgen_test]
async fn button_variants_and_kinds() {
    let root = append("div", "");
    let app = yew::Renderer::<Buttons>::with_root(root.clone()).render();
    TimeoutFuture::new(20).await;

    let outline = root.first_element_child().expect("outline button");
    assert_eq!(outline.class_name(), "btn btn-outline");
    assert_eq!(outline.get_attribute("type").as_deref(), Some("button"));

    let submit = root.last_element_child().expect("submit button");
    assert_eq!(submit.class_name(), "btn btn-primary");
    assert_eq!(submit.get_attribute("type").as_deref(), Some("submit"));

    app.destroy();
    root.remove();
}
