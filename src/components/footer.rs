use chrono::Datelike;
use yew::prelude::*;

use crate::components::scroll_link::ScrollLink;
use crate::config;
use crate::icons::IconSvg;
use crate::nav::NavItem;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or(config::NAV_ITEMS)]
    pub items: &'static [NavItem],
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="grid grid-3">
                    <div>
                        <h2 class="footer-brand">{ config::BRAND }</h2>
                        <p>{"Global web development experts specializing in company websites, e-commerce solutions, SaaS platforms, and personal portfolios."}</p>
                    </div>
                    <div>
                        <h3 class="footer-heading">{"Quick Links"}</h3>
                        <ul class="footer-links">
                            { for props.items.iter().map(|item| html! {
                                <li key={item.label}>
                                    <ScrollLink to={item.target} class="footer-link">
                                        { item.label }
                                    </ScrollLink>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h3 class="footer-heading">{"Connect With Us"}</h3>
                        <div class="social-links">
                            { for config::SOCIAL_LINKS.iter().map(|link| html! {
                                <a key={link.label} href={link.href} class="footer-link">
                                    <span class="sr-only">{ link.label }</span>
                                    <IconSvg icon={link.icon} />
                                </a>
                            }) }
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{ format!("© {} {}. All rights reserved.", year, config::BRAND) }</p>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: #003366;
                        color: #ffffff;
                        padding: 3rem 0;
                    }
                    .footer-brand {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .footer-heading {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .footer-links {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .footer-links li + li {
                        margin-top: 0.5rem;
                    }
                    .footer-link {
                        color: #ffffff;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .footer-link:hover {
                        color: #FF6600;
                    }
                    .social-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-bottom {
                        margin-top: 2rem;
                        padding-top: 2rem;
                        border-top: 1px solid #0099CC;
                        text-align: center;
                    }
                "#}
            </style>
        </footer>
    }
}
