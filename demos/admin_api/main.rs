//! Runnable back-office server with sample data
//!
//! ```bash
//! cargo run --example admin_api
//! # then: curl -s -X POST localhost:3000/api/admin/auth \
//! #   -H 'content-type: application/json' \
//! #   -d '{"email":"admin@example.com","password":"admin123"}'
//! ```

use anyhow::Result;
use backoffice::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_yaml_file(&path)?,
        None => AppConfig::default(),
    };

    let (app, state) = ServerBuilder::new().with_config(config).build_with_state();
    seed(&state).await?;

    let addr = state.config.server.addr.clone();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Populate the collections the way a fresh install would look
async fn seed(state: &AppState) -> Result<()> {
    for name in ["Electronics", "Sensors", "Motors"] {
        state
            .categories
            .create(Category::create(CategoryDraft {
                name: name.to_string(),
            }))
            .await?;
    }

    let products = [
        ("SE-100 Controller", "SE100", "Electronics", 199.0, 23, ProductStatus::Active),
        ("SG-200 Sensor", "SG200", "Sensors", 89.0, 120, ProductStatus::Active),
        ("AX-350 Motor", "AX350", "Motors", 499.0, 8, ProductStatus::Inactive),
    ];
    for (name, sku, category, price, stock, status) in products {
        state
            .products
            .create(Product::create(ProductDraft {
                name: name.to_string(),
                sku: sku.to_string(),
                category: category.to_string(),
                price,
                stock,
                status,
                description: Some("Reliable industrial component.".to_string()),
                image_url: None,
            }))
            .await?;
    }

    let engineering = state
        .jobs
        .create(Job::create(JobDraft {
            title: "Senior Software Engineer".to_string(),
            department: "Engineering".to_string(),
            location: "Remote".to_string(),
            employment_type: "Full-time".to_string(),
            salary: "$120,000 - $150,000".to_string(),
            description: "Join our team to build industrial control software.".to_string(),
            requirements: "5+ years of experience in software development.".to_string(),
            responsibilities: "Lead technical projects, mentor junior developers.".to_string(),
            skills: vec!["Rust".to_string(), "PostgreSQL".to_string(), "AWS".to_string()],
            benefits: vec!["Health Insurance".to_string(), "Remote Work".to_string()],
        }))
        .await?;

    state
        .jobs
        .create(Job::create(JobDraft {
            title: "Product Manager".to_string(),
            department: "Product".to_string(),
            location: "New York".to_string(),
            employment_type: "Full-time".to_string(),
            salary: "$100,000 - $130,000".to_string(),
            description: "Drive the development of our product line.".to_string(),
            requirements: "3+ years of product management experience.".to_string(),
            responsibilities: "Define product strategy, work with engineering.".to_string(),
            skills: vec!["Analytics".to_string(), "User Research".to_string()],
            benefits: vec!["Health Insurance".to_string(), "Stock Options".to_string()],
        }))
        .await?;

    state
        .applications
        .create(Application::submit(ApplicationDraft {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: Some("+1 (555) 123-4567".to_string()),
            position: engineering.title.clone(),
            message: Some("Excited about this opportunity.".to_string()),
            resume_name: "john_doe_resume.pdf".to_string(),
            resume_size: 245_760,
            job_id: Some(engineering.id),
        }))
        .await?;

    for (name, email, subject, body) in [
        (
            "Alice Johnson",
            "alice@example.com",
            "Inquiry about product availability",
            "Is the SE-100 model available for immediate purchase?",
        ),
        (
            "Ben Carter",
            "ben.carter@example.com",
            "Bulk order pricing",
            "Could you provide bulk pricing for 200 units?",
        ),
    ] {
        state
            .messages
            .create(Message::receive(MessageDraft {
                name: name.to_string(),
                email: email.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            }))
            .await?;
    }

    tracing::info!("sample data loaded");
    Ok(())
}
