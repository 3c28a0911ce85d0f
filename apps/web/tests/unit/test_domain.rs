use neural_style_web::domain::{
    image::DataUrl,
    workspace::entity::{ImageRole, Workspace, WorkspaceChange},
};

#[test]
fn data_url_keeps_browser_prefix_verbatim() {
    let raw = "data:image/jpeg;name=cat.jpg;base64,/9j/4AAQ";
    let url = DataUrl::parse(raw).expect("valid data url");
    assert_eq!(url.mime_type(), "image/jpeg");
    assert_eq!(url.to_string(), raw);
    assert_eq!(url.decode().expect("valid base64"), vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10]);
}

#[test]
fn data_url_without_scheme_still_splits_payload() {
    let url = DataUrl::parse("whatever,AQID").expect("comma is enough");
    assert_eq!(url.mime_type(), "application/octet-stream");
    assert_eq!(url.decode().expect("valid base64"), vec![1, 2, 3]);
}

#[test]
fn stylized_result_is_png_regardless_of_inputs() {
    let url = DataUrl::png(&[1, 2, 3]);
    assert_eq!(url.to_string(), "data:image/png;base64,AQID");
}

#[test]
fn style_upload_does_not_touch_content_or_result() {
    let mut workspace = Workspace::default();
    let content = DataUrl::from_bytes("image/png", b"content");
    let result = DataUrl::png(b"result");

    workspace.apply(WorkspaceChange::ImageSelected {
        role: ImageRole::Content,
        image: content.clone(),
    });
    workspace.apply(WorkspaceChange::Stylized(Some(result.clone())));
    workspace.apply(WorkspaceChange::ImageSelected {
        role: ImageRole::Style,
        image: DataUrl::from_bytes("image/png", b"style"),
    });

    assert_eq!(workspace.content_image, Some(content));
    assert_eq!(workspace.stylized_image, Some(result));
}
