//! A small in-process stand-in for the remote car registry.
//!
//! Serves the same routes as the real service under `/api/{code}/car`,
//! keeps its records in a mutex-guarded `Vec`, and assigns ids
//! sequentially. Runs on an ephemeral port so tests can run in parallel.

#![allow(dead_code)]

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use rouille::{Request, Response, Server};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const CODE: &str = "TEST42";

/// Wire-format record, camelCase like the real service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRecord {
    #[serde(default)]
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub day_of_commission: String,
    pub fuel_use: f64,
    pub electric: bool,
    pub owner: String,
}

pub fn car(id: i64, brand: &str, model: &str, year: i32, fuel_use: f64, owner: &str) -> CarRecord {
    CarRecord {
        id,
        brand: brand.to_string(),
        model: model.to_string(),
        day_of_commission: format!("{}-01-01", year),
        fuel_use,
        electric: false,
        owner: owner.to_string(),
    }
}

struct State {
    cars: Vec<CarRecord>,
    next_id: i64,
}

pub struct MockServer {
    pub url: String,
    state: Arc<Mutex<State>>,
    stop: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl MockServer {
    pub fn start(seed: Vec<CarRecord>) -> Self {
        let next_id = seed.iter().map(|car| car.id).max().unwrap_or(0) + 1;
        let state = Arc::new(Mutex::new(State {
            cars: seed,
            next_id,
        }));

        let handler_state = state.clone();
        let server = Server::new("127.0.0.1:0", move |request| {
            handle(request, &handler_state)
        })
        .unwrap();

        let url = format!("http://{}", server.server_addr());
        let (join, stop) = server.stoppable();

        MockServer {
            url,
            state,
            stop: Some(stop),
            join: Some(join),
        }
    }

    /// Full collection endpoint, the form `HttpStore::new` expects.
    pub fn endpoint(&self) -> String {
        format!("{}/api/{}/car", self.url, CODE)
    }

    /// Snapshot of the server-side records, for assertions.
    pub fn cars(&self) -> Vec<CarRecord> {
        self.state.lock().unwrap().cars.clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

fn handle(request: &Request, state: &Arc<Mutex<State>>) -> Response {
    let collection = format!("/api/{}/car", CODE);
    let path = request.url();

    if let Some(rest) = path.strip_prefix(&collection) {
        if rest.is_empty() {
            return handle_collection(request, state);
        }
        if let Some(id_str) = rest.strip_prefix('/') {
            if let Ok(id) = id_str.parse::<i64>() {
                return handle_item(request, state, id);
            }
        }
    }

    Response::json(&json!({ "message": "unknown route" })).with_status_code(500)
}

fn handle_collection(request: &Request, state: &Arc<Mutex<State>>) -> Response {
    match request.method() {
        "GET" => {
            let state = state.lock().unwrap();
            Response::json(&state.cars)
        }
        "POST" => match rouille::input::json_input::<CarRecord>(request) {
            Ok(mut record) => {
                let mut state = state.lock().unwrap();
                record.id = state.next_id;
                state.next_id += 1;
                state.cars.push(record.clone());
                Response::json(&record)
            }
            Err(e) => Response::json(&json!({ "message": format!("invalid body: {}", e) }))
                .with_status_code(400),
        },
        // The real service takes PUT on the collection root, id in the body.
        "PUT" => match rouille::input::json_input::<CarRecord>(request) {
            Ok(record) => {
                let mut state = state.lock().unwrap();
                match state.cars.iter_mut().find(|car| car.id == record.id) {
                    Some(slot) => {
                        *slot = record.clone();
                        Response::json(&record)
                    }
                    None => not_found(record.id),
                }
            }
            Err(e) => Response::json(&json!({ "message": format!("invalid body: {}", e) }))
                .with_status_code(400),
        },
        _ => Response::json(&json!({ "message": "method not allowed" })).with_status_code(500),
    }
}

fn handle_item(request: &Request, state: &Arc<Mutex<State>>, id: i64) -> Response {
    match request.method() {
        "GET" => {
            let state = state.lock().unwrap();
            match state.cars.iter().find(|car| car.id == id) {
                Some(car) => Response::json(car),
                None => not_found(id),
            }
        }
        "DELETE" => {
            let mut state = state.lock().unwrap();
            let before = state.cars.len();
            state.cars.retain(|car| car.id != id);
            if state.cars.len() < before {
                // Plain text on purpose: the real service answers 2xx
                // without a JSON body here.
                Response::text("deleted")
            } else {
                not_found(id)
            }
        }
        _ => Response::json(&json!({ "message": "method not allowed" })).with_status_code(500),
    }
}

fn not_found(id: i64) -> Response {
    Response::json(&json!({ "message": format!("no car with id {}", id) })).with_status_code(404)
}
