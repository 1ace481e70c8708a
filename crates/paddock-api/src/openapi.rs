// SPDX-License-Identifier: Apache-2.0

use crate::{API_ERROR_CODES, API_TITLE, API_VERSION};
use serde_json::{json, Value};

#[must_use]
pub fn openapi_spec() -> Value {
    let error_codes: Vec<&str> = API_ERROR_CODES.iter().map(|c| c.as_str()).collect();
    json!({
      "openapi": "3.0.3",
      "info": {
        "title": API_TITLE,
        "description": "API for F1 driver classification with feature flag support",
        "version": API_VERSION
      },
      "paths": {
        "/": {
          "get": {
            "responses": {"200": {"description": "API information", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ServiceInfo"}}}}}
          }
        },
        "/api/classification": {
          "get": {
            "description": "Driver classification; Rubens Barrichello leads when RUBINHO_CAMPEAO=true",
            "responses": {"200": {"description": "classification", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ClassificationResponse"}}}}}
          }
        },
        "/healthz": {"get": {"responses": {"200": {"description": "ok"}}}},
        "/metrics": {"get": {"responses": {"200": {"description": "prometheus metrics"}}}},
        "/openapi.json": {"get": {"responses": {"200": {"description": "this document"}}}}
      },
      "components": {
        "schemas": {
          "RankedEntry": {
            "type": "object",
            "required": ["position", "name", "team", "points"],
            "additionalProperties": false,
            "properties": {
              "position": {"type": "integer", "minimum": 1},
              "name": {"type": "string", "minLength": 1},
              "team": {"type": "string", "minLength": 1},
              "points": {"type": "integer", "minimum": 0},
              "isChampion": {"type": "boolean"}
            }
          },
          "ClassificationResponse": {
            "type": "object",
            "required": ["data"],
            "additionalProperties": false,
            "properties": {
              "data": {"type": "array", "items": {"$ref": "#/components/schemas/RankedEntry"}}
            }
          },
          "ServiceInfo": {
            "type": "object",
            "required": ["message", "version", "endpoints"],
            "properties": {
              "message": {"type": "string"},
              "version": {"type": "string"},
              "endpoints": {"type": "object", "additionalProperties": {"type": "string"}}
            }
          },
          "ApiErrorCode": {"type": "string", "enum": error_codes},
          "ApiError": {
            "type": "object",
            "required": ["code", "message", "details", "request_id"],
            "additionalProperties": false,
            "properties": {
              "code": {"$ref": "#/components/schemas/ApiErrorCode"},
              "message": {"type": "string"},
              "details": {"type": "object"},
              "request_id": {"type": "string"}
            }
          }
        }
      }
    })
}
