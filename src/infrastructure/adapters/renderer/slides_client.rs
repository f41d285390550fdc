//! Slides Renderer Client
//!
//! Implements DeckRendererPort against a Google-Slides-style presentation
//! API: create a presentation, then execute the whole operation list as one
//! batch update.
//!
//! POST {base_url}/v1/presentations            -> {"presentationId": "..."}
//! POST {base_url}/v1/presentations/{id}:batchUpdate
//!   Request: {"requests": [...]}

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::application::ports::{DeckHandle, DeckRendererPort, RenderError};
use crate::config::RendererConfig;
use crate::domain::deck::{
    ContentAlignment, DashStyle, DeckOp, Dimensions, Fill, OutlineStyle, ParagraphAlignment, Rgb,
    ShapeKind, Transform,
};

/// Slides client configuration
#[derive(Debug, Clone)]
pub struct SlidesRendererClientConfig {
    pub base_url: String,
    pub token: String,
    pub timeout_secs: u64,
}

impl From<&RendererConfig> for SlidesRendererClientConfig {
    fn from(config: &RendererConfig) -> Self {
        Self {
            base_url: config.url.clone(),
            token: config.token.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreatePresentationResponse {
    #[serde(rename = "presentationId")]
    presentation_id: String,
}

/// HTTP presentation renderer client
pub struct SlidesRendererClient {
    client: Client,
    config: SlidesRendererClientConfig,
}

impl SlidesRendererClient {
    pub fn new(config: SlidesRendererClientConfig) -> Result<Self, RenderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RenderError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn create_url(&self) -> String {
        format!("{}/v1/presentations", self.config.base_url)
    }

    fn batch_update_url(&self, presentation_id: &str) -> String {
        format!(
            "{}/v1/presentations/{}:batchUpdate",
            self.config.base_url, presentation_id
        )
    }

    async fn post(&self, url: String, body: Value) -> Result<Value, RenderError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RenderError::Timeout
                } else {
                    RenderError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RenderError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| RenderError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl DeckRendererPort for SlidesRendererClient {
    async fn render(&self, title: &str, ops: &[DeckOp]) -> Result<DeckHandle, RenderError> {
        let created = self
            .post(self.create_url(), json!({ "title": title }))
            .await?;
        let created: CreatePresentationResponse = serde_json::from_value(created)
            .map_err(|e| RenderError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            presentation_id = %created.presentation_id,
            op_count = ops.len(),
            "Executing batch update"
        );

        let requests: Vec<Value> = ops.iter().map(to_request).collect();
        self.post(
            self.batch_update_url(&created.presentation_id),
            json!({ "requests": requests }),
        )
        .await?;

        Ok(DeckHandle {
            presentation_id: created.presentation_id,
        })
    }
}

/// Translate one layout operation into its wire request
fn to_request(op: &DeckOp) -> Value {
    match op {
        DeckOp::CreateSlide {
            object_id,
            insertion_index,
        } => {
            let mut create = json!({
                "objectId": object_id,
                "slideLayoutReference": { "predefinedLayout": "BLANK" },
            });
            if let Some(index) = insertion_index {
                create["insertionIndex"] = json!(index);
            }
            json!({ "createSlide": create })
        }

        DeckOp::DeleteObject { object_id } => json!({
            "deleteObject": { "objectId": object_id }
        }),

        DeckOp::CreateImage {
            object_id,
            slide_id,
            url,
            transform,
        } => json!({
            "createImage": {
                "objectId": object_id,
                "url": url,
                "elementProperties": {
                    "pageObjectId": slide_id,
                    "transform": transform_value(transform),
                },
            }
        }),

        DeckOp::CreateShape {
            object_id,
            slide_id,
            kind,
            size,
            transform,
        } => {
            let mut properties = json!({
                "pageObjectId": slide_id,
                "size": size_value(size),
            });
            if let Some(transform) = transform {
                properties["transform"] = transform_value(transform);
            }
            json!({
                "createShape": {
                    "objectId": object_id,
                    "shapeType": shape_type(kind),
                    "elementProperties": properties,
                }
            })
        }

        DeckOp::UpdateShapeStyle {
            object_id,
            fill,
            outline,
            content_alignment,
            link_url,
        } => {
            let mut fields = Vec::new();
            let mut properties = json!({});
            if let Some(fill) = fill {
                fields.push("shapeBackgroundFill");
                properties["shapeBackgroundFill"] = json!({ "solidFill": fill_value(fill) });
            }
            if let Some(outline) = outline {
                fields.push("outline");
                properties["outline"] = outline_value(outline);
            }
            if let Some(alignment) = content_alignment {
                fields.push("contentAlignment");
                properties["contentAlignment"] = json!(content_alignment_value(alignment));
            }
            if let Some(url) = link_url {
                fields.push("link");
                properties["link"] = json!({ "url": url });
            }
            json!({
                "updateShapeProperties": {
                    "objectId": object_id,
                    "fields": fields.join(","),
                    "shapeProperties": properties,
                }
            })
        }

        DeckOp::InsertText { object_id, text } => json!({
            "insertText": { "objectId": object_id, "text": text }
        }),

        DeckOp::UpdateParagraphStyle {
            object_id,
            alignment,
        } => json!({
            "updateParagraphStyle": {
                "objectId": object_id,
                "fields": "alignment",
                "style": { "alignment": paragraph_alignment_value(alignment) },
            }
        }),

        DeckOp::UpdateTextStyle { object_id, style } => {
            let mut fields = vec!["bold", "fontSize"];
            let mut style_value = json!({
                "bold": style.bold,
                "fontSize": dimension_value(style.font_size_pt),
            });
            if let Some(family) = style.font_family {
                fields.push("fontFamily");
                style_value["fontFamily"] = json!(family);
            }
            if let Some(color) = &style.foreground {
                fields.push("foregroundColor");
                style_value["foregroundColor"] = json!({ "opaqueColor": color_value(color) });
            }
            json!({
                "updateTextStyle": {
                    "objectId": object_id,
                    "fields": fields.join(","),
                    "style": style_value,
                }
            })
        }
    }
}

fn shape_type(kind: &ShapeKind) -> &'static str {
    match kind {
        ShapeKind::TextBox => "TEXT_BOX",
        ShapeKind::RoundRectangle => "ROUND_RECTANGLE",
    }
}

fn content_alignment_value(alignment: &ContentAlignment) -> &'static str {
    match alignment {
        ContentAlignment::Top => "TOP",
        ContentAlignment::Middle => "MIDDLE",
    }
}

fn paragraph_alignment_value(alignment: &ParagraphAlignment) -> &'static str {
    match alignment {
        ParagraphAlignment::Start => "START",
        ParagraphAlignment::Center => "CENTER",
    }
}

fn dimension_value(magnitude_pt: f64) -> Value {
    json!({ "magnitude": magnitude_pt, "unit": "PT" })
}

fn size_value(size: &Dimensions) -> Value {
    json!({
        "width": dimension_value(size.width_pt),
        "height": dimension_value(size.height_pt),
    })
}

fn transform_value(transform: &Transform) -> Value {
    json!({
        "scaleX": transform.scale_x,
        "scaleY": transform.scale_y,
        "translateX": transform.translate_x_pt,
        "translateY": transform.translate_y_pt,
        "unit": "PT",
    })
}

fn color_value(color: &Rgb) -> Value {
    json!({
        "rgbColor": {
            "red": color.red,
            "green": color.green,
            "blue": color.blue,
        }
    })
}

fn fill_value(fill: &Fill) -> Value {
    json!({
        "alpha": fill.alpha,
        "color": color_value(&fill.color),
    })
}

fn outline_value(outline: &OutlineStyle) -> Value {
    let dash = match outline.dash {
        DashStyle::Solid => "SOLID",
    };
    json!({
        "weight": dimension_value(outline.weight_pt),
        "dashStyle": dash,
        "outlineFill": { "solidFill": { "color": color_value(&outline.color) } },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::deck::TextStyle;

    #[test]
    fn test_create_slide_with_insertion_index() {
        let op = DeckOp::CreateSlide {
            object_id: "finalSlide".to_string(),
            insertion_index: Some(0),
        };
        let request = to_request(&op);
        assert_eq!(request["createSlide"]["objectId"], "finalSlide");
        assert_eq!(request["createSlide"]["insertionIndex"], 0);
        assert_eq!(
            request["createSlide"]["slideLayoutReference"]["predefinedLayout"],
            "BLANK"
        );
    }

    #[test]
    fn test_create_slide_without_insertion_index() {
        let op = DeckOp::CreateSlide {
            object_id: "0_SLIDE".to_string(),
            insertion_index: None,
        };
        let request = to_request(&op);
        assert!(request["createSlide"].get("insertionIndex").is_none());
    }

    #[test]
    fn test_create_image_request() {
        let op = DeckOp::CreateImage {
            object_id: "0_IMAGE".to_string(),
            slide_id: "0_SLIDE".to_string(),
            url: "https://cdn.example.com/0.png".to_string(),
            transform: Transform::scaled(1.05),
        };
        let request = to_request(&op);
        let image = &request["createImage"];
        assert_eq!(image["url"], "https://cdn.example.com/0.png");
        assert_eq!(image["elementProperties"]["pageObjectId"], "0_SLIDE");
        assert_eq!(image["elementProperties"]["transform"]["scaleX"], 1.05);
        assert_eq!(image["elementProperties"]["transform"]["unit"], "PT");
    }

    #[test]
    fn test_shape_style_field_mask_tracks_present_options() {
        let op = DeckOp::UpdateShapeStyle {
            object_id: "0_PARAGRAPH".to_string(),
            fill: Some(Fill {
                color: Rgb::grey(0.37),
                alpha: 0.69,
            }),
            outline: Some(OutlineStyle {
                color: Rgb::grey(0.35),
                weight_pt: 1.0,
                dash: DashStyle::Solid,
            }),
            content_alignment: Some(ContentAlignment::Top),
            link_url: None,
        };
        let request = to_request(&op);
        let update = &request["updateShapeProperties"];
        assert_eq!(update["fields"], "shapeBackgroundFill,outline,contentAlignment");
        let fill = &update["shapeProperties"]["shapeBackgroundFill"]["solidFill"];
        assert_eq!(fill["alpha"], 0.69);
        assert_eq!(fill["color"]["rgbColor"]["red"], 0.37);
        assert_eq!(
            update["shapeProperties"]["outline"]["dashStyle"],
            "SOLID"
        );
        assert_eq!(update["shapeProperties"]["contentAlignment"], "TOP");
    }

    #[test]
    fn test_link_button_request_carries_hyperlink() {
        let op = DeckOp::UpdateShapeStyle {
            object_id: "sourcelink".to_string(),
            fill: Some(Fill {
                color: Rgb::grey(0.93),
                alpha: 0.85,
            }),
            outline: None,
            content_alignment: None,
            link_url: Some("https://example.com/project".to_string()),
        };
        let request = to_request(&op);
        let update = &request["updateShapeProperties"];
        assert_eq!(update["fields"], "shapeBackgroundFill,link");
        assert_eq!(
            update["shapeProperties"]["link"]["url"],
            "https://example.com/project"
        );
    }

    #[test]
    fn test_text_style_request() {
        let op = DeckOp::UpdateTextStyle {
            object_id: "titlebackground".to_string(),
            style: TextStyle {
                bold: true,
                font_size_pt: 80.0,
                font_family: Some("Pacifico"),
                foreground: Some(Rgb::new(1.0, 1.0, 1.0)),
            },
        };
        let request = to_request(&op);
        let update = &request["updateTextStyle"];
        assert_eq!(update["fields"], "bold,fontSize,fontFamily,foregroundColor");
        assert_eq!(update["style"]["bold"], true);
        assert_eq!(update["style"]["fontSize"]["magnitude"], 80.0);
        assert_eq!(update["style"]["fontFamily"], "Pacifico");
        assert_eq!(
            update["style"]["foregroundColor"]["opaqueColor"]["rgbColor"]["red"],
            1.0
        );
    }

    #[test]
    fn test_urls() {
        let client = SlidesRendererClient::new(SlidesRendererClientConfig {
            base_url: "https://slides.example.com".to_string(),
            token: "t".to_string(),
            timeout_secs: 30,
        })
        .unwrap();
        assert_eq!(client.create_url(), "https://slides.example.com/v1/presentations");
        assert_eq!(
            client.batch_update_url("abc"),
            "https://slides.example.com/v1/presentations/abc:batchUpdate"
        );
    }
}
