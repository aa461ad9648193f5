use axum::extract::Multipart;

/// An uploaded PDF with its data and original filename.
pub struct UploadedPaper {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Parse the multipart form upload into the `paper` field.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<UploadedPaper, String> {
    let mut paper: Option<UploadedPaper> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read form field: {}", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "paper" => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file data: {}", e))?
                    .to_vec();

                check_pdf_magic(&filename, &data)?;

                paper = Some(UploadedPaper { filename, data });
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    paper.ok_or_else(|| "No file uploaded".to_string())
}

/// Verify the upload actually looks like a PDF via its magic bytes.
fn check_pdf_magic(filename: &str, data: &[u8]) -> Result<(), String> {
    if data.starts_with(b"%PDF-") {
        return Ok(());
    }
    Err(format!(
        "{} doesn't appear to be a valid PDF file",
        filename
    ))
}
