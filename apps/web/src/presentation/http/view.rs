use crate::domain::{image::DataUrl, workspace::entity::Workspace};

const PAGE_TEMPLATE: &str = include_str!("../../../templates/index.html");

/// Renders the page in a single pass over the template. Inserted tags are
/// never scanned for placeholders again.
pub fn render_page(workspace: &Workspace) -> String {
    let mut html = String::with_capacity(PAGE_TEMPLATE.len());
    let mut rest = PAGE_TEMPLATE;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        let end = start + 2 + len + 2;
        html.push_str(&rest[..start]);
        match slot_tag(workspace, &rest[start + 2..start + 2 + len]) {
            Some(tag) => html.push_str(&tag),
            None => html.push_str(&rest[start..end]),
        }
        rest = &rest[end..];
    }

    html.push_str(rest);
    html
}

fn slot_tag(workspace: &Workspace, placeholder: &str) -> Option<String> {
    let tag = match placeholder {
        "content_preview" => image_tag(
            "uploaded-content-image",
            "preview",
            workspace.content_image.as_ref(),
        ),
        "style_preview" => image_tag(
            "uploaded-style-image",
            "preview",
            workspace.style_image.as_ref(),
        ),
        "stylized_image" => image_tag("stylized-image", "result", workspace.stylized_image.as_ref()),
        _ => return None,
    };
    Some(tag)
}

fn image_tag(id: &str, class: &str, src: Option<&DataUrl>) -> String {
    match src {
        Some(url) => format!(
            r#"<img id="{}" class="{}" alt="" src="{}">"#,
            id,
            class,
            escaper::encode_attribute(&url.to_string())
        ),
        None => format!(r#"<img id="{}" class="{}" alt="" hidden>"#, id, class),
    }
}
