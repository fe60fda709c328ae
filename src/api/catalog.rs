// ABOUTME: Compiled-in content served by the data service
// ABOUTME: Builds the owner profile and the ordered consulting catalog fresh on every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

use super::models::{Profile, Service, ServicesResponse};

/// The site owner's profile
#[must_use]
pub fn profile() -> Profile {
    Profile {
        name: "Tosin Femi".into(),
        title: "Cloud & DevOps Consultant".into(),
        tagline: "Modern cloud solutions for resilient, secure and scalable systems.".into(),
        summary: "I help teams design, build, and operate cloud infrastructure on Azure and AWS \
                  with a strong focus on Kubernetes, Terraform, automation, and observability."
            .into(),
        technologies: [
            "Azure",
            "AWS",
            "Kubernetes (AKS/EKS)",
            "Terraform",
            "GitHub Actions",
            "Azure DevOps",
            "Docker",
            "Argo CD",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        location: "Calgary · Remote-friendly".into(),
    }
}

/// The consulting catalog in display order
#[must_use]
pub fn services() -> ServicesResponse {
    let items = [
        (
            "cloud-architecture",
            "Cloud Architecture & Migration",
            "Azure & AWS landing zones, workload migration plans, and security-focused network design.",
            "Cloud",
        ),
        (
            "kubernetes-platform",
            "Kubernetes & Platform Engineering",
            "Production-ready AKS/EKS clusters, GitOps workflows, and multi-environment platform design.",
            "Kubernetes",
        ),
        (
            "devops-automation",
            "DevOps & Automation",
            "Infrastructure as Code, CI/CD pipelines, and release automation for faster, safer delivery.",
            "DevOps",
        ),
        (
            "observability-reliability",
            "Observability & Reliability",
            "Logging, metrics, alerting, and SLOs so your team can detect and fix issues quickly.",
            "Operations",
        ),
    ]
    .into_iter()
    .map(|(slug, name, description, category)| Service {
        slug: slug.into(),
        name: name.into(),
        description: description.into(),
        category: category.into(),
    })
    .collect();

    ServicesResponse { items }
}
