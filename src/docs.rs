use utoipa::OpenApi;
use crate::common::response::{ErrorBody, MessageResponse};
use crate::modules::analysis::dto::*;
use crate::modules::auth::dto::*;
use crate::modules::ingest::dto::*;
use crate::modules::jobs::model::{AnalysisType, JobStatus};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::handler::auth,
        crate::modules::analysis::handler::analyze,
        crate::modules::ingest::handler::storage_event,
    ),
    components(
        schemas(
            AuthRequest, SignupResponse, SigninResponse,
            AnalyzeRequest, AnalyzeResponse, AnalysisType, JobStatus,
            StorageEvent, StorageEventRecord, S3Entity, S3Bucket, S3Object,
            ErrorBody, MessageResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Sign-up and sign-in relayed to the user directory"),
        (name = "Analysis", description = "SEO metadata and blog posts generated from transcripts"),
        (name = "Ingest", description = "Storage notifications that start transcription jobs")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

use utoipa::Modify;
use utoipa::openapi::security::{SecurityScheme, HttpAuthScheme, HttpBuilder};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "bridge_token",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}
