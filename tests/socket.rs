use actix_web::App;
use actix_web::web::Bytes;
use awc::ws;
use bingochain::auth::Claims;
use bingochain::relay::GameId;
use bingochain::wallet::Address;
use bingochain::*;
use clap::Parser;
use futures::SinkExt;
use futures::Stream;
use futures::StreamExt;
use serde_json::Value;
use serde_json::json;
use std::time::Duration;

const ALICE: &str = "0x90F8bf6A479f320ead074411a4B0e7944Ea8c9C1";
const BOB: &str = "0xFFcf8FDEE72ac11b5c542428B35EEF5769C409f0";

fn context() -> Context {
    let config = Config::try_parse_from([
        "bingochain",
        "--backend-url",
        "http://127.0.0.1:1/api/v1",
        "--secret",
        "test-secret",
    ])
    .unwrap();
    Context::from(&config)
}

fn frame(event: &str, data: Value) -> ws::Message {
    ws::Message::Text(json!({ "event": event, "data": data }).to_string().into())
}

async fn next<S, E>(socket: &mut S) -> ws::Frame
where
    S: Stream<Item = Result<ws::Frame, E>> + Unpin,
    E: std::fmt::Debug,
{
    tokio::time::timeout(Duration::from_secs(5), socket.next())
        .await
        .expect("socket went quiet")
        .expect("socket closed")
        .unwrap()
}

async fn event<S, E>(socket: &mut S) -> Value
where
    S: Stream<Item = Result<ws::Frame, E>> + Unpin,
    E: std::fmt::Debug,
{
    match next(socket).await {
        ws::Frame::Text(bytes) => serde_json::from_slice(&bytes).unwrap(),
        other => panic!("expected text frame, got {:?}", other),
    }
}

async fn settle(relay: &bingochain::relay::Relay, clients: usize, rooms: usize) {
    for _ in 0..200 {
        if relay.clients().await == clients && relay.rooms().await == rooms {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!(
        "relay stuck at {} clients, {} rooms",
        relay.clients().await,
        relay.rooms().await
    );
}

#[actix_web::test]
async fn socket_session_end_to_end() {
    let ctx = context();
    let relay = ctx.relay.clone();
    let token = ctx
        .crypto
        .encode(&Claims::new(&Address::try_from(ALICE).unwrap()))
        .unwrap();
    let shared = ctx.clone();
    let mut srv = actix_test::start(move || {
        let ctx = shared.clone();
        App::new().configure(move |cfg| ctx.configure(cfg))
    });
    let game = GameId::from(7);

    let mut bound = srv.ws_at(&format!("/ws?token={}", token)).await.unwrap();
    let mut anon = srv.ws_at("/ws?token=not-a-token").await.unwrap();
    for socket in [&mut bound, &mut anon] {
        let greeting = event(socket).await;
        assert_eq!(greeting["event"], "status");
        assert_eq!(greeting["data"]["msg"], "Connected to BingoChain server");
    }
    settle(&relay, 2, 0).await;

    // the pong is only written after the join ahead of it was dispatched
    bound
        .send(frame("join_game_room", json!({"game_id": 7, "wallet_address": BOB})))
        .await
        .unwrap();
    bound.send(ws::Message::Ping(Bytes::from_static(b"hi"))).await.unwrap();
    assert_eq!(next(&mut bound).await, ws::Frame::Pong(Bytes::from_static(b"hi")));
    assert!(relay.members(&game).await.is_empty());

    anon.send(frame("join_game_room", json!({"game_id": 7, "wallet_address": BOB})))
        .await
        .unwrap();
    assert_eq!(
        event(&mut anon).await,
        json!({"event": "joined_room", "data": {"room": "game_7", "game_id": 7}})
    );
    assert_eq!(relay.members(&game).await.len(), 1);

    bound
        .send(frame("join_game_room", json!({"game_id": 7, "wallet_address": ALICE.to_lowercase()})))
        .await
        .unwrap();
    assert_eq!(event(&mut bound).await["event"], "joined_room");
    assert_eq!(event(&mut anon).await["event"], "joined_room");

    anon.send(frame("number_called", json!({"game_id": 7, "number": 42, "timestamp": "t"})))
        .await
        .unwrap();
    let called = json!({"event": "number_called", "data": {"game_id": 7, "number": 42, "timestamp": "t"}});
    assert_eq!(event(&mut bound).await, called);
    assert_eq!(event(&mut anon).await, called);
    assert_eq!(relay.clients().await, 2);
    assert_eq!(relay.rooms().await, 1);

    bound.send(ws::Message::Close(None)).await.unwrap();
    settle(&relay, 1, 1).await;
    assert_eq!(relay.members(&game).await.len(), 1);

    anon.send(ws::Message::Close(None)).await.unwrap();
    settle(&relay, 0, 0).await;
}
