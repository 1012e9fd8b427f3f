use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};
use shared_types::{
    BlogPost, BookingCreated, BookingPayload, GalleryImage, HomepageContent, Promotion, Room,
    Service,
};

use crate::backend::BackendError;
#[cfg(feature = "ssr")]
use crate::backend::{get_client, BackendClient};
#[cfg(feature = "ssr")]
use reqwest::Method;

/// Result of forwarding a booking to the hotel API. A rejection is a normal
/// reply so the browser receives the API's own message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CreateBookingReply {
    Created(BookingCreated),
    Rejected { status: u16, message: Option<String> },
}

impl CreateBookingReply {
    /// Reads the hotel API's answer to `POST /api/bookings`. A refusal is a
    /// reply carrying the API's status and message; only transport and setup
    /// failures stay errors.
    ///
    /// A 2xx whose body is not a booking is reported as a booking without a
    /// confirmation URL.
    pub fn from_api(response: Result<String, BackendError>) -> Result<Self, BackendError> {
        match response {
            Ok(body) => {
                let created = serde_json::from_str::<BookingCreated>(&body).unwrap_or_else(|e| {
                    tracing::warn!("Booking API returned unreadable success body: {}", e);
                    BookingCreated::default()
                });
                Ok(CreateBookingReply::Created(created))
            }
            Err(BackendError::Status { status, message }) => {
                Ok(CreateBookingReply::Rejected { status, message })
            }
            Err(e) => Err(e),
        }
    }

    pub fn into_result(self) -> Result<BookingCreated, BackendError> {
        match self {
            CreateBookingReply::Created(created) => Ok(created),
            CreateBookingReply::Rejected { status, message } => {
                Err(BackendError::Status { status, message })
            }
        }
    }
}

/// Error text returned when the hotel API refuses the admin token.
pub const ADMIN_SESSION_REJECTED: &str = "Admin session is no longer valid";

#[cfg(feature = "ssr")]
fn backend() -> Result<&'static BackendClient, ServerFnError> {
    get_client().map_err(|e| {
        tracing::error!("{}", e);
        ServerFnError::new("Hotel API is not available".to_string())
    })
}

#[cfg(feature = "ssr")]
fn api_error(context: &str, err: BackendError) -> ServerFnError {
    tracing::error!("{}: {}", context, err);
    if err.is_unauthorized() {
        return ServerFnError::new(ADMIN_SESSION_REJECTED.to_string());
    }
    match err.server_message() {
        Some(message) => ServerFnError::new(format!("{}: {}", context, message)),
        None => ServerFnError::new(context.to_string()),
    }
}

#[cfg(feature = "ssr")]
fn record_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, urlencoding::encode(id))
}

#[server]
pub async fn list_rooms() -> Result<Vec<Room>, ServerFnError> {
    backend()?
        .get("/api/rooms")
        .await
        .map_err(|e| api_error("Failed to fetch rooms", e))
}

#[server]
pub async fn get_room(room_id: String) -> Result<Room, ServerFnError> {
    backend()?
        .get(&record_path("/api/rooms", &room_id))
        .await
        .map_err(|e| api_error("Failed to fetch room", e))
}

#[server]
pub async fn list_promotions() -> Result<Vec<Promotion>, ServerFnError> {
    backend()?
        .get("/api/promotions")
        .await
        .map_err(|e| api_error("Failed to fetch promotions", e))
}

#[server]
pub async fn list_gallery() -> Result<Vec<GalleryImage>, ServerFnError> {
    backend()?
        .get("/api/gallery")
        .await
        .map_err(|e| api_error("Failed to fetch gallery", e))
}

#[server]
pub async fn list_posts() -> Result<Vec<BlogPost>, ServerFnError> {
    backend()?
        .get("/api/blog")
        .await
        .map_err(|e| api_error("Failed to fetch blog posts", e))
}

#[server]
pub async fn get_post(slug: String) -> Result<BlogPost, ServerFnError> {
    backend()?
        .get(&record_path("/api/blog", &slug))
        .await
        .map_err(|e| api_error("Failed to fetch blog post", e))
}

#[server]
pub async fn get_homepage() -> Result<HomepageContent, ServerFnError> {
    backend()?
        .get("/api/homepage")
        .await
        .map_err(|e| api_error("Failed to fetch homepage content", e))
}

#[server]
pub async fn list_services() -> Result<Vec<Service>, ServerFnError> {
    backend()?
        .get("/api/services")
        .await
        .map_err(|e| api_error("Failed to fetch services", e))
}

#[server]
pub async fn create_booking(payload: BookingPayload) -> Result<CreateBookingReply, ServerFnError> {
    let response = backend()?
        .send_text(Method::POST, "/api/bookings", &payload, None)
        .await;

    match CreateBookingReply::from_api(response) {
        Ok(reply) => {
            if let CreateBookingReply::Rejected { status, .. } = &reply {
                tracing::info!(status = *status, room_id = %payload.room_id, "Booking rejected by hotel API");
            }
            Ok(reply)
        }
        Err(e) => Err(api_error("Failed to reach booking service", e)),
    }
}

#[server]
pub async fn save_homepage(
    token: String,
    content: HomepageContent,
) -> Result<HomepageContent, ServerFnError> {
    backend()?
        .send(Method::PUT, "/api/homepage", &content, Some(&token))
        .await
        .map_err(|e| api_error("Failed to save homepage", e))
}

#[server]
pub async fn save_service(token: String, service: Service) -> Result<Service, ServerFnError> {
    let client = backend()?;
    let result = match service.id.as_deref() {
        Some(id) => {
            client
                .send(Method::PUT, &record_path("/api/services", id), &service, Some(&token))
                .await
        }
        None => {
            client
                .send(Method::POST, "/api/services", &service, Some(&token))
                .await
        }
    };
    result.map_err(|e| api_error("Failed to save service", e))
}

#[server]
pub async fn delete_service(token: String, service_id: String) -> Result<(), ServerFnError> {
    backend()?
        .delete(&record_path("/api/services", &service_id), Some(&token))
        .await
        .map_err(|e| api_error("Failed to delete service", e))
}

#[server]
pub async fn save_promotion(
    token: String,
    promotion: Promotion,
) -> Result<Promotion, ServerFnError> {
    let client = backend()?;
    let result = match promotion.id.as_deref() {
        Some(id) => {
            client
                .send(
                    Method::PUT,
                    &record_path("/api/promotions", id),
                    &promotion,
                    Some(&token),
                )
                .await
        }
        None => {
            client
                .send(Method::POST, "/api/promotions", &promotion, Some(&token))
                .await
        }
    };
    result.map_err(|e| api_error("Failed to save promotion", e))
}

#[server]
pub async fn delete_promotion(token: String, promotion_id: String) -> Result<(), ServerFnError> {
    backend()?
        .delete(&record_path("/api/promotions", &promotion_id), Some(&token))
        .await
        .map_err(|e| api_error("Failed to delete promotion", e))
}
