use amble_routing::error::RoutingError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
}

impl From<RoutingError> for ApiError {
    fn from(error: RoutingError) -> Self {
        if error.is_client_error() {
            ApiError::BadRequest(error.to_string())
        } else {
            ApiError::InternalServerError(error.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::InternalServerError(message) => {
                error!("{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amble_routing::comfort_factor::ComfortFactor;
    use amble_routing::error::ValidationError;
    use amble_routing::route::RouteVariant;

    #[test]
    fn test_validation_is_bad_request() {
        let response =
            ApiError::from(RoutingError::from(ValidationError::MissingFactor(
                ComfortFactor::Greenery,
            )))
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_routing_failures_are_server_errors() {
        let no_route = RoutingError::NoRouteFound {
            variant: RouteVariant::Shortest,
            source_node: 1,
            target_node: 2,
        };
        let missing_edge = RoutingError::MissingEdge {
            variant: RouteVariant::Comfort,
            edge_id: 7,
        };

        for error in [no_route, missing_edge] {
            assert_eq!(
                ApiError::from(error).into_response().status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }
}
