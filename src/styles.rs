use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Page-wide styles, mounted once next to the app root.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <>
            <Global css={css!(r#"
    html {
        scroll-behavior: auto;
    }
    body {
        margin: 0;
        background: #F4F4F4;
        color: #18181b;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        line-height: 1.5;
    }
    h1, h2, h3, p {
        margin-top: 0;
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .section {
        padding: 5rem 0;
    }
    .section-white {
        background: #ffffff;
    }
    .section-title {
        font-size: 1.875rem;
        font-weight: 700;
        text-align: center;
        margin-bottom: 3rem;
        color: #003366;
    }
    .subsection-title {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
        color: #003366;
    }
    .paragraph {
        margin-bottom: 1rem;
    }
    .grid {
        display: grid;
        gap: 2rem;
        grid-template-columns: 1fr;
    }
    .align-center {
        align-items: center;
    }
    .centered {
        display: flex;
        justify-content: center;
    }
    .accent {
        color: #FF6600;
    }
    .muted {
        color: #52525b;
        margin-bottom: 1rem;
    }
    .sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        padding: 0;
        margin: -1px;
        overflow: hidden;
        clip: rect(0, 0, 0, 0);
        white-space: nowrap;
        border: 0;
    }
    .reveal {
        will-change: opacity, transform;
    }
    @media (min-width: 768px) {
        .grid-2, .grid-3, .grid-4 {
            grid-template-columns: repeat(2, 1fr);
        }
        .grid-3 {
            grid-template-columns: repeat(3, 1fr);
        }
    }
    @media (min-width: 1024px) {
        .grid-4 {
            grid-template-columns: repeat(4, 1fr);
        }
    }
"#)} />
            // Button, card and form field primitives from `components::ui`.
            <Global css={css!(r#"
    .btn {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        border-radius: 0.375rem;
        font-size: 0.875rem;
        font-weight: 500;
        cursor: pointer;
        text-decoration: none;
        transition: background-color 0.2s ease, color 0.2s ease;
    }
    .btn-primary {
        background: #FF6600;
        color: #ffffff;
        border: 1px solid #FF6600;
    }
    .btn-primary:hover {
        background: #FF8533;
        border-color: #FF8533;
    }
    .btn-outline {
        background: #ffffff;
        color: #003366;
        border: 1px solid #d4d4d8;
    }
    .btn-outline:hover {
        background: #F4F4F4;
    }
    .btn-lg {
        padding: 0.75rem 2rem;
        font-size: 1rem;
    }
    .card {
        background: #ffffff;
        border: 1px solid #e4e4e7;
        border-radius: 0.5rem;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .card-content {
        padding: 1.5rem;
    }
    .field {
        display: block;
        width: 100%;
        box-sizing: border-box;
        padding: 0.5rem 0.75rem;
        border: 1px solid #d4d4d8;
        border-radius: 0.375rem;
        background: #ffffff;
        font: inherit;
    }
    .field:focus {
        outline: 2px solid #0099CC;
        outline-offset: 1px;
    }
    .field-multiline {
        min-height: 6rem;
        resize: vertical;
    }
"#)} />
        </>
    }
}
