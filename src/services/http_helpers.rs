use actix_web::{
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    HttpResponse,
};

/// Creates a downloadable attachment named `filename`
pub fn download(filename: &str, content_type: &'static str, body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename.to_string())],
        })
        .body(body)
}

pub fn text_download(filename: &str, body: String) -> HttpResponse {
    download(filename, "text/plain; charset=utf-8", body)
}

pub fn csv_download(filename: &str, body: String) -> HttpResponse {
    download(filename, "text/csv; charset=utf-8", body)
}
