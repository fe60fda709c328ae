// ABOUTME: Page catalog for the web frontend: copy, banner text, templates, and data needs
// ABOUTME: Builds the template context from whatever backend data a request obtained
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

use super::{
    client::{CoreData, Resources},
    models::PageData,
};

/// The four rendered pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// `/`
    Home,
    /// `/services`
    Services,
    /// `/about`
    About,
    /// `/contact`
    Contact,
}

impl Page {
    /// Every page, in navigation order
    pub const ALL: [Self; 4] = [Self::Home, Self::Services, Self::About, Self::Contact];

    /// Template file rendered for this page
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Home => "home.html",
            Self::Services => "services.html",
            Self::About => "about.html",
            Self::Contact => "contact.html",
        }
    }

    /// Backend resources fetched before rendering
    #[must_use]
    pub const fn resources(self) -> Resources {
        match self {
            Self::Home | Self::Services => Resources::ALL,
            Self::About => Resources::PROFILE,
            Self::Contact => Resources::NONE,
        }
    }

    /// Whether the fetched profile is passed to the template
    ///
    /// The services page fetches the profile alongside the catalog but does
    /// not display it.
    #[must_use]
    pub const fn shows_profile(self) -> bool {
        matches!(self, Self::Home | Self::About)
    }

    /// Banner shown when a backend fetch failed
    #[must_use]
    pub const fn banner(self) -> Option<&'static str> {
        match self {
            Self::Home => {
                Some("Some data could not be loaded from the API. Please try again later.")
            }
            Self::Services => Some("Unable to load services from the API."),
            Self::About => Some("Unable to load profile information from the API."),
            Self::Contact => None,
        }
    }

    /// Page heading
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Cloud & DevOps Consulting",
            Self::Services => "Services",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    /// Sub-heading
    #[must_use]
    pub const fn tagline(self) -> &'static str {
        match self {
            Self::Home => "Modern cloud solutions for resilient, secure and scalable systems.",
            Self::Services => {
                "End-to-end consulting across Cloud, DevOps, and Platform Engineering."
            }
            Self::About => "Hands-on Cloud Engineer & IT Consultant.",
            Self::Contact => "Let’s talk about your infrastructure and delivery challenges.",
        }
    }

    /// Intro paragraph
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Home => {
                "I help teams design, build, and operate cloud infrastructure on Azure and AWS \
                 with a strong focus on Kubernetes, Terraform, automation, and observability."
            }
            Self::Services => {
                "From greenfield builds to rescuing existing platforms, I partner with teams to \
                 design and implement pragmatic cloud solutions."
            }
            Self::About => {
                "I work with organizations to modernize infrastructure, improve reliability, and \
                 ship faster using proven DevOps practices."
            }
            Self::Contact => {
                "Use the form below to describe your current environment and what you’d like to \
                 improve. I’ll respond with practical next steps."
            }
        }
    }

    /// Assemble the template context from this request's backend data
    #[must_use]
    pub fn page_data(self, data: CoreData) -> PageData {
        let error = if data.degraded {
            self.banner().map(str::to_owned)
        } else {
            None
        };

        PageData {
            title: self.title().to_owned(),
            tagline: self.tagline().to_owned(),
            description: self.description().to_owned(),
            profile: data.profile.filter(|_| self.shows_profile()),
            services: data.services,
            error,
        }
    }
}
