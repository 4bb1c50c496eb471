//! Built-in diagram set used when no config file is given

use super::{DiagramEntry, ProjectInfo};
use std::path::PathBuf;

const DIAGRAMS: &[(&str, &str)] = &[
    (
        "user_registration_workflow",
        "Complete user registration flow including validation, password hashing, JWT token generation, and welcome email notification.",
    ),
    (
        "feed_discovery_workflow",
        "AI-powered feed discovery using multiple similarity algorithms (Jaccard, Cosine, Complementary skills) with fallback to random recommendations.",
    ),
    (
        "connection_request_workflow",
        "Connection request management workflow including sending requests, email notifications, and accept/reject functionality.",
    ),
    (
        "realtime_chat_workflow",
        "Real-time messaging system with Socket.IO, message persistence, and user presence tracking.",
    ),
    (
        "system_architecture_hld",
        "Complete system architecture showing client layer, CDN, frontend application, backend services, data layer, and external integrations.",
    ),
    (
        "database_schema_lld",
        "Complete database schema showing User, Message, ConnectionRequest, and Payment entities with their relationships and fields.",
    ),
    (
        "ml_recommendation_engine",
        "ML recommendation engine architecture showing input processing, feature extraction, similarity algorithms, scoring, and output generation.",
    ),
    (
        "payment_workflow",
        "Complete payment integration workflow with PhonePe, including payment creation, verification, and premium activation.",
    ),
    (
        "authentication_flow",
        "Complete authentication and authorization flow including JWT token management, middleware protection, and Socket.IO authentication.",
    ),
];

pub(super) fn diagrams() -> Vec<DiagramEntry> {
    DIAGRAMS
        .iter()
        .map(|(stem, description)| DiagramEntry {
            input: PathBuf::from(format!("diagrams/{stem}.mmd")),
            output: format!("{stem}.png"),
            description: Some((*description).to_string()),
        })
        .collect()
}

pub(super) fn project() -> ProjectInfo {
    ProjectInfo {
        name: "DevConnect".to_string(),
        tagline: "Generated PNG images from Mermaid diagrams for DevConnect project".to_string(),
        summary: "A comprehensive full-stack developer networking platform featuring AI-powered recommendations, \
                  real-time messaging, premium subscriptions, and modern architecture patterns."
            .to_string(),
    }
}
