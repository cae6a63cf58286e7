//! Page shells. The browser scripts fetch everything else from `/api`
//! and subscribe to `/ws`; these only give them a document to mount on.
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::http::header::ContentType;
use actix_web::web;

pub async fn index() -> impl Responder {
    html(
        "BingoChain",
        r#"<h1>BingoChain</h1>
<p>Blockchain lottery with NFT tickets.</p>
<ul>
  <li><a href="/my-tickets">My tickets</a></li>
  <li><a href="/health">Service health</a></li>
</ul>
<section id="lotteries"></section>"#,
    )
}

pub async fn lottery(path: web::Path<u64>) -> impl Responder {
    let id = path.into_inner();
    html(
        &format!("BingoChain - Lottery {}", id),
        &format!(
            r#"<h1>Lottery {id}</h1>
<section id="lottery" data-lottery-id="{id}"></section>
<section id="called-numbers"></section>
<a href="/purchase/{id}">Buy a ticket</a>"#
        ),
    )
}

pub async fn my_tickets() -> impl Responder {
    html(
        "BingoChain - My tickets",
        r#"<h1>My tickets</h1>
<section id="tickets"></section>"#,
    )
}

pub async fn purchase(path: web::Path<u64>) -> impl Responder {
    let id = path.into_inner();
    html(
        &format!("BingoChain - Buy ticket for lottery {}", id),
        &format!(
            r#"<h1>Buy a ticket</h1>
<form id="purchase" data-lottery-id="{id}"></form>"#
        ),
    )
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Not found" }))
}

fn html(title: &str, body: &str) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
</head>
<body>
<main class="container">
{body}
</main>
</body>
</html>"#
    ))
}
