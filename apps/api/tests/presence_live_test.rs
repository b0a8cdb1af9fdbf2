mod common;

use std::net::SocketAddr;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use api::middleware::auth::AuthMiddleware;
use api::websocket::connection::ConnectionManager;
use api::websocket::presence::announce_offline;
use application::auth::tokens::issue_access_token;
use futures::{SinkExt, StreamExt};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::{json, Value};
use socialnet_core::entities::users;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use uuid::Uuid;

use common::{insert_user, setup_db, test_config, SECRET};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

const WAIT: Duration = Duration::from_secs(5);

async fn connect(addr: SocketAddr, user_id: Uuid) -> Socket {
    let token = issue_access_token(SECRET, user_id, chrono::Duration::minutes(5)).unwrap();
    let (socket, _) = connect_async(format!("ws://{}/chathub?token={}", addr, token))
        .await
        .expect("websocket connect");
    socket
}

/// Next JSON frame from the server.
async fn next_event(socket: &mut Socket) -> Value {
    loop {
        let msg = tokio::time::timeout(WAIT, socket.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("socket closed")
            .expect("socket error");
        if let Message::Text(text) = msg {
            return serde_json::from_str(&text).unwrap();
        }
    }
}

/// Sends an application ping and returns the first frame that comes back.
/// Anything queued before the pong shows up first.
async fn ping(socket: &mut Socket) -> Value {
    socket
        .send(Message::Text(json!({ "type": "Ping" }).to_string()))
        .await
        .unwrap();
    next_event(socket).await
}

async fn close(mut socket: Socket) {
    socket.close(None).await.unwrap();
    // Server answers the close once it has dropped the connection
    while let Ok(Some(Ok(_))) = tokio::time::timeout(WAIT, socket.next()).await {}
}

async fn is_online(db: &DatabaseConnection, user_id: Uuid) -> bool {
    users::Entity::find_by_id(user_id)
        .one(db)
        .await
        .unwrap()
        .unwrap()
        .is_online
}

#[actix_web::test]
async fn test_presence_follows_first_and_last_connection() {
    let db = setup_db().await;
    let alice = insert_user(&db, "alice").await;
    let bob = insert_user(&db, "bob").await;

    let db_data = web::Data::new(db.clone());
    let config = web::Data::new(test_config());
    let manager = web::Data::new(ConnectionManager::new());

    let server = {
        let (db_data, config, manager) = (db_data.clone(), config.clone(), manager.clone());
        HttpServer::new(move || {
            App::new()
                .wrap(AuthMiddleware)
                .app_data(db_data.clone())
                .app_data(config.clone())
                .app_data(manager.clone())
                .configure(api::configure)
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap()
    };
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    // First tab brings alice online
    let mut alice_tab1 = connect(addr, alice.user_id).await;
    assert_eq!(
        next_event(&mut alice_tab1).await,
        json!({ "type": "Connect", "payload": { "info": "alice is online" } })
    );
    assert!(is_online(&db, alice.user_id).await);

    let mut bob_ws = connect(addr, bob.user_id).await;
    assert_eq!(next_event(&mut bob_ws).await["payload"]["info"], "bob is online");
    assert_eq!(next_event(&mut alice_tab1).await["payload"]["info"], "bob is online");

    // A second tab is not announced again
    let mut alice_tab2 = connect(addr, alice.user_id).await;
    assert_eq!(ping(&mut alice_tab2).await, json!({ "type": "Pong" }));
    assert_eq!(ping(&mut bob_ws).await, json!({ "type": "Pong" }));

    // Closing one of two tabs keeps alice online
    close(alice_tab2).await;
    assert!(is_online(&db, alice.user_id).await);
    assert_eq!(ping(&mut bob_ws).await, json!({ "type": "Pong" }));

    // A late offline announce while a tab is live changes nothing
    announce_offline(&db, &manager, None, alice.user_id).await;
    assert!(is_online(&db, alice.user_id).await);
    assert_eq!(ping(&mut bob_ws).await, json!({ "type": "Pong" }));

    // An HTTP mutation pushes a refresh to the counterpart
    let token = issue_access_token(SECRET, alice.user_id, chrono::Duration::minutes(5)).unwrap();
    let resp = reqwest::Client::new()
        .get(format!("http://{}/Home/SendFollow/{}", addr, bob.user_id))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    assert_eq!(
        next_event(&mut bob_ws).await,
        json!({ "type": "ReceiveNotification" })
    );

    // The SendFollow frame does the same over the socket
    alice_tab1
        .send(Message::Text(
            json!({ "type": "SendFollow", "payload": { "id": bob.user_id } }).to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(
        next_event(&mut bob_ws).await,
        json!({ "type": "ReceiveNotification" })
    );

    // Last tab gone: alice goes offline
    close(alice_tab1).await;
    assert_eq!(
        next_event(&mut bob_ws).await,
        json!({ "type": "Disconnect", "payload": { "info": "alice is offline" } })
    );
    assert!(!is_online(&db, alice.user_id).await);

    close(bob_ws).await;
    handle.stop(true).await;
}
