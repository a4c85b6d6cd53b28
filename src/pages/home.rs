use log::info;
use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::scroll_link::ScrollLink;
use crate::components::ui::{Button, ButtonVariant, Card, CardContent, Input, Textarea};
use crate::config::{self, anchor};
use crate::icons::{Icon, IconSvg};
use crate::reveal::{RevealOptions, RevealTrigger};

/// Hero pieces fade in on load, one after another.
fn hero_step(delay_ms: u32, offset_px: f64) -> RevealOptions {
    RevealOptions {
        trigger: RevealTrigger::Mount,
        delay_ms,
        offset_px,
        ..RevealOptions::default()
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id={anchor::HOME} class="hero">
            <div class="container hero-inner">
                <AnimatedSection options={hero_step(0, -20.0)}>
                    <h1 class="hero-title">{ format!("Welcome to {}", config::BRAND) }</h1>
                </AnimatedSection>
                <AnimatedSection options={hero_step(200, -20.0)}>
                    <p class="hero-subtitle">{"Global Web Development Experts"}</p>
                </AnimatedSection>
                <AnimatedSection class="hero-tiles" options={hero_step(400, 20.0)}>
                    { for config::SERVICES.iter().map(|service| html! {
                        <div key={service.name} class="hero-tile">
                            <IconSvg icon={service.icon} size={32} class="hero-tile-icon" />
                            <p>{ service.name }</p>
                        </div>
                    }) }
                </AnimatedSection>
                <AnimatedSection options={hero_step(600, 20.0)}>
                    <ScrollLink to={anchor::CONTACT} class="btn btn-primary btn-lg">
                        {"Request a Consultation"}
                        <IconSvg icon={Icon::ArrowRight} size={16} />
                    </ScrollLink>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id={anchor::ABOUT}>
            <AnimatedSection class="section">
                <div class="container">
                    <h2 class="section-title">{ format!("About {}", config::BRAND) }</h2>
                    <div class="grid grid-2 align-center">
                        <div>
                            <h3 class="subsection-title">{"Our Mission"}</h3>
                            <p class="paragraph">
                                {"At Missiteam, our mission is to empower businesses and individuals worldwide with cutting-edge web solutions. We believe in harnessing the power of technology to create impactful digital experiences that drive growth and success."}
                            </p>
                            <p>
                                {"With a team of 50+ talented developers spread across the globe, we bring diverse perspectives and expertise to every project, ensuring innovative and culturally relevant solutions for our clients."}
                            </p>
                        </div>
                        <div class="centered">
                            <IconSvg icon={Icon::Globe} size={192} class="accent" />
                        </div>
                    </div>
                </div>
            </AnimatedSection>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id={anchor::SERVICES}>
            <AnimatedSection class="section section-white">
                <div class="container">
                    <h2 class="section-title">{"Our Services"}</h2>
                    <div class="grid grid-4">
                        { for config::SERVICES.iter().map(|service| html! {
                            <Card key={service.name}>
                                <CardContent class="service-card">
                                    <IconSvg icon={service.icon} size={48} class="accent" />
                                    <h3 class="card-title">{ service.name }</h3>
                                    <p class="muted">{ service.description }</p>
                                    <Button variant={ButtonVariant::Outline}>{"Learn More"}</Button>
                                </CardContent>
                            </Card>
                        }) }
                    </div>
                </div>
            </AnimatedSection>
        </section>
    }
}

#[function_component(Portfolio)]
fn portfolio() -> Html {
    html! {
        <section id={anchor::PORTFOLIO}>
            <AnimatedSection class="section">
                <div class="container">
                    <h2 class="section-title">{"Our Portfolio"}</h2>
                    <div class="grid grid-3">
                        { for (1..=config::PORTFOLIO_PROJECTS).map(|n| {
                            let title = format!("Project {}", n);
                            html! {
                                <Card key={n}>
                                    <CardContent>
                                        <div class="media">
                                            <img
                                                src={config::placeholder_url(
                                                    config::PORTFOLIO_IMAGE_WIDTH,
                                                    config::PORTFOLIO_IMAGE_HEIGHT,
                                                    &title,
                                                )}
                                                alt={title.clone()}
                                                width={config::PORTFOLIO_IMAGE_WIDTH.to_string()}
                                                height={config::PORTFOLIO_IMAGE_HEIGHT.to_string()}
                                                loading="lazy"
                                            />
                                        </div>
                                        <h3 class="card-title">{ title }</h3>
                                        <p class="muted">{"A brief description of the project and its key features."}</p>
                                        <Button variant={ButtonVariant::Outline}>{"View Details"}</Button>
                                    </CardContent>
                                </Card>
                            }
                        }) }
                    </div>
                </div>
            </AnimatedSection>
        </section>
    }
}

#[function_component(WhyUs)]
fn why_us() -> Html {
    html! {
        <AnimatedSection class="section section-white">
            <div class="container">
                <h2 class="section-title">{ format!("Why Choose {}?", config::BRAND) }</h2>
                <div class="grid grid-3">
                    { for config::HIGHLIGHTS.iter().map(|highlight| html! {
                        <Card key={highlight.title}>
                            <CardContent>
                                <h3 class="card-title">{ highlight.title }</h3>
                                <p>{ highlight.body }</p>
                            </CardContent>
                        </Card>
                    }) }
                </div>
            </div>
        </AnimatedSection>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("contact form submitted; submissions are not handled by this page");
    });

    html! {
        <section id={anchor::CONTACT}>
            <AnimatedSection class="section">
                <div class="container">
                    <h2 class="section-title">{"Contact Us"}</h2>
                    <div class="grid grid-2">
                        <form class="contact-form" {onsubmit}>
                            <Input name="name" placeholder="Your Name" />
                            <Input kind="email" name="email" placeholder="Your Email" />
                            <Textarea name="message" placeholder="Your Message" />
                            <Button kind="submit">{"Send Message"}</Button>
                        </form>
                        <div>
                            <h3 class="subsection-title">{"Get in Touch"}</h3>
                            <p class="paragraph">{"Feel free to reach out to us using the contact form or the information below:"}</p>
                            <ul class="contact-details">
                                <li><strong>{"Address: "}</strong>{ config::CONTACT.address }</li>
                                <li><strong>{"Phone: "}</strong>{ config::CONTACT.phone }</li>
                                <li><strong>{"Email: "}</strong>{ config::CONTACT.email }</li>
                            </ul>
                            <div class="media">
                                <iframe
                                    src={config::MAP_EMBED_URL}
                                    width="600"
                                    height="450"
                                    style="border: 0;"
                                    loading="lazy"
                                    title="Office location"
                                ></iframe>
                            </div>
                        </div>
                    </div>
                </div>
            </AnimatedSection>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <Hero />
            <About />
            <Services />
            <Portfolio />
            <WhyUs />
            <Contact />
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(to bottom right, #003366, #0099CC);
                        color: #ffffff;
                        padding-top: 5rem;
                        box-sizing: border-box;
                    }
                    .hero-inner {
                        padding: 5rem 1rem;
                        text-align: center;
                    }
                    .hero-title {
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        margin-bottom: 2rem;
                    }
                    .hero-tiles {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .hero-tile {
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(4px);
                        border-radius: 0.5rem;
                        padding: 1rem;
                        transition: transform 0.2s ease;
                    }
                    .hero-tile:hover {
                        transform: scale(1.05);
                    }
                    .hero-tile:active {
                        transform: scale(0.95);
                    }
                    .hero-tile p {
                        font-size: 0.875rem;
                        margin: 0;
                    }
                    .hero-tile-icon {
                        display: block;
                        margin: 0 auto 0.5rem;
                    }
                    .service-card {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }
                    .card-title {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin: 1rem 0 0.5rem;
                    }
                    .media {
                        aspect-ratio: 16 / 9;
                        overflow: hidden;
                        border-radius: 0.375rem;
                        margin-bottom: 1rem;
                    }
                    .media img, .media iframe {
                        display: block;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        align-items: flex-start;
                    }
                    .contact-details {
                        list-style: none;
                        padding: 0;
                        margin: 0 0 2rem;
                    }
                    .contact-details li + li {
                        margin-top: 0.5rem;
                    }
                "#}
            </style>
        </main>
    }
}
