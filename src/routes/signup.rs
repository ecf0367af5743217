use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use log::debug;
use std::collections::HashMap;

use crate::form::data::Field;
use crate::form::{SignupForm, SubmitOutcome};
use crate::services::sink::LogSink;

pub async fn show_form() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(SignupForm::new().render())
}

pub async fn submit_form(data: web::Form<HashMap<String, String>>) -> impl Responder {
    let mut form = SignupForm::new();

    for (key, value) in data.into_inner() {
        match Field::from_wire_name(&key) {
            Some(field) => form.update(field, value),
            None => debug!("Ignoring unknown form key '{}'", key),
        }
    }

    let mut response = match form.submit(&mut LogSink) {
        SubmitOutcome::Submitted => HttpResponse::Ok(),
        SubmitOutcome::Rejected(_) => HttpResponse::UnprocessableEntity(),
    };

    response.content_type(ContentType::html()).body(form.render())
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(show_form))
        .route("/signup", web::post().to(submit_form));
}
