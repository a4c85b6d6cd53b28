//! Small presentational primitives shared by the page sections.

use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or(AttrValue::Static("button"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!(
        "btn",
        match props.variant {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        }
    );
    html! {
        <button type={props.kind.clone()} {class}>
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &ContainerProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardContent)]
pub fn card_content(props: &ContainerProps) -> Html {
    html! {
        <div class={classes!("card-content", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InputProps {
    #[prop_or(AttrValue::Static("text"))]
    pub kind: AttrValue,
    pub name: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    html! {
        <input
            class="field"
            type={props.kind.clone()}
            name={props.name.clone()}
            placeholder={props.placeholder.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct TextareaProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
}

#[function_component(Textarea)]
pub fn textarea(props: &TextareaProps) -> Html {
    html! {
        <textarea
            class="field field-multiline"
            name={props.name.clone()}
            placeholder={props.placeholder.clone()}
            rows="4"
        />
    }
}
