use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::reveal::{RevealAction, RevealOptions, RevealState, RevealTrigger};

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub options: RevealOptions,
    #[prop_or_default]
    pub children: Children,
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Wraps its children and fades them in once, the first time they are seen.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let state = use_reducer(RevealState::default);
    let node = use_node_ref();
    let options = props.options;

    {
        let state = state.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match options.trigger {
                    RevealTrigger::Mount => {
                        let dispatcher = state.dispatcher();
                        let timeout = Timeout::new(config::MOUNT_REVEAL_DELAY_MS, move || {
                            dispatcher.dispatch(RevealAction::Entered);
                        });
                        Box::new(move || drop(timeout))
                    }
                    RevealTrigger::InView => observe(node, state.dispatcher(), options),
                };
                destructor
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone())}
            style={options.style(*state)}
        >
            { for props.children.iter() }
        </div>
    }
}

fn observe(
    node: NodeRef,
    dispatcher: UseReducerDispatcher<RevealState>,
    options: RevealOptions,
) -> Box<dyn FnOnce()> {
    let Some(element) = node.cast::<Element>() else {
        warn!("reveal block has no element, showing it");
        dispatcher.dispatch(RevealAction::Unobservable);
        return Box::new(|| ());
    };
    if !observer_supported() {
        debug!("IntersectionObserver unavailable, showing block");
        dispatcher.dispatch(RevealAction::Unobservable);
        return Box::new(|| ());
    }

    let threshold = options.effective_threshold();
    let callback = {
        let dispatcher = dispatcher.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let entered = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| {
                        RevealState::Hidden
                            .on_intersection(entry.is_intersecting(), entry.intersection_ratio(), threshold)
                            .is_visible()
                    });
                if entered {
                    dispatcher.dispatch(RevealAction::Entered);
                    // Fire once: nothing left to watch.
                    observer.disconnect();
                }
            },
        )
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(err) => {
            warn!("failed to create IntersectionObserver: {:?}", err);
            dispatcher.dispatch(RevealAction::Unobservable);
            return Box::new(|| ());
        }
    };
    observer.observe(&element);

    Box::new(move || {
        observer.disconnect();
        drop(callback);
    })
}
