//! Shared harness running the brand studio over a real socket.
//!
//! The server and every client call are driven on a single-threaded runtime
//! through a `LocalSet`, because awc clients and WebSocket frames are
//! `!Send`.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::http::{Method, header};
use actix_web::{App, HttpServer, web};
use awc::{BoxedSocket, Client, ws::Codec};
use backend::Trace;
use backend::domain::ports::BrandEventPublisher;
use backend::domain::{BrandCreationService, FeedbackService};
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::inbound::ws;
use backend::inbound::ws::state::WsState;
use backend::outbound::events::BroadcastBrandEvents;
use backend::outbound::memory::InMemoryRecordStore;
use backend::test_support::clock::MutableClock;
use rstest::fixture;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;
use url::Url;

pub(crate) const ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub(crate) type Socket = actix_codec::Framed<BoxedSocket, Codec>;

pub(crate) struct StudioWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) brand_creation_id: Option<String>,
    pub(crate) socket: Option<Socket>,
}

pub(crate) type SharedWorld = Rc<RefCell<StudioWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        let ctx = self.world.borrow();
        let server = ctx.server.clone();
        ctx.local.block_on(&ctx.runtime, async move {
            server.stop(true).await;
        });
    }
}

/// Run `operation` on the world's runtime. The future must not touch the
/// world itself.
pub(crate) fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

/// Send a JSON request and record the status and body on the world.
pub(crate) fn perform_json_request(
    world: &SharedWorld,
    method: Method,
    path: &str,
    payload: Option<Value>,
) {
    let path = path.to_owned();
    let (status, body) = with_world_async(world, |base_url| async move {
        let request = Client::default().request(method, format!("{base_url}{path}"));
        let mut response = match payload {
            Some(payload) => request.send_json(&payload).await.expect("json request"),
            None => request.send().await.expect("request"),
        };
        let status = response.status().as_u16();
        let body = response.body().await.expect("body");
        let json: Value = serde_json::from_slice(&body).expect("json body");
        (status, json)
    });

    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(status);
    ctx.last_body = Some(body);
}

/// Open a WebSocket connection to the event feed from the allowed origin.
pub(crate) fn connect_feed(world: &SharedWorld) {
    let socket = with_world_async(world, |base_url| async move {
        let (_response, socket) = Client::default()
            .ws(format!("{base_url}/ws"))
            .set_header(header::ORIGIN, ALLOWED_ORIGIN)
            .connect()
            .await
            .expect("websocket connect");
        socket
    });
    world.borrow_mut().socket = Some(socket);
}

fn memory_states(events: Arc<BroadcastBrandEvents>) -> (HttpState, WsState) {
    let store = Arc::new(InMemoryRecordStore::new());
    let clock = Arc::new(MutableClock::default());
    let publisher: Arc<dyn BrandEventPublisher> = events.clone();
    let brands = Arc::new(
        BrandCreationService::new(store.clone(), clock.clone()).with_events(publisher.clone()),
    );
    let feedback = Arc::new(FeedbackService::new(store, clock).with_events(publisher));
    let http_state = HttpState::new(HttpStatePorts {
        brand_creations: brands.clone(),
        brand_creations_query: brands,
        feedback: feedback.clone(),
        feedback_query: feedback,
    });
    let allowed = [Url::parse(ALLOWED_ORIGIN).expect("static origin")];
    (http_state, WsState::new(events, &allowed))
}

async fn spawn_server(
    http_state: HttpState,
    ws_state: WsState,
) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let http_data = web::Data::new(http_state);
    let ws_data = web::Data::new(ws_state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_data.clone())
            .app_data(ws_data.clone())
            .wrap(Trace)
            .service(web::scope("/api/v1").configure(backend::inbound::http::configure))
            .service(ws::ws_entry)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

#[fixture]
pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();
    let (http_state, ws_state) = memory_states(Arc::new(BroadcastBrandEvents::default()));

    let (base_url, server) = local
        .block_on(&runtime, async { spawn_server(http_state, ws_state).await })
        .expect("server should start");

    WorldFixture {
        world: Rc::new(RefCell::new(StudioWorld {
            runtime,
            local,
            base_url,
            server,
            last_status: None,
            last_body: None,
            brand_creation_id: None,
            socket: None,
        })),
    }
}
