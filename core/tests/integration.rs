//! Reorder lifecycle against the live server.
//!
//! Starts the server on a random port under the `/api` prefix, then drives
//! every client operation over real HTTP using ureq.

use todo_core::{ApiError, CreateTodo, HttpMethod, HttpResponse, TodoClient, UpdateTodo};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// 4xx/5xx responses are returned as data rather than `Err`, so the client
/// does the status interpretation.
fn execute(req: todo_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Patch, Some(body)) => {
            agent.patch(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Patch, None) => agent.patch(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn create(client: &TodoClient, value: &str) -> Result<todo_core::Todo, ApiError> {
    let req = client.build_create_todo(&CreateTodo {
        value: value.to_string(),
    })?;
    client.parse_create_todo(execute(req))
}

#[test]
fn reorder_lifecycle() {
    // Step 1: start the server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, "/api").await
        })
        .unwrap();
    });

    let client = TodoClient::new(&format!("http://{addr}/api"));

    // Step 2: list, should be empty.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // Step 3: create two todos; orders count up from 1.
    let dishes = create(&client, "wash dishes").unwrap();
    assert_eq!(dishes.order, 1);
    let milk = create(&client, "buy milk").unwrap();
    assert_eq!(milk.order, 2);

    // Step 4: invalid input is rejected with the server's message.
    let err = create(&client, &"x".repeat(51)).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest { ref message } if message.contains("50")));

    // Step 5: list, highest order first.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos, vec![milk.clone(), dishes.clone()]);

    // Step 6: move "wash dishes" to the top; the two orders swap.
    let update = UpdateTodo {
        order: Some(2),
        ..Default::default()
    };
    let req = client.build_update_todo(dishes.id, &update).unwrap();
    client.parse_update_todo(execute(req)).unwrap();

    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!((todos[0].id, todos[0].order), (dishes.id, 2));
    assert_eq!((todos[1].id, todos[1].order), (milk.id, 1));

    // Step 7: complete and re-open.
    let done = UpdateTodo {
        done: Some(true),
        ..Default::default()
    };
    let req = client.build_update_todo(dishes.id, &done).unwrap();
    client.parse_update_todo(execute(req)).unwrap();
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos[0].done_at.is_some());

    let reopen = UpdateTodo {
        done: Some(false),
        ..Default::default()
    };
    let req = client.build_update_todo(dishes.id, &reopen).unwrap();
    client.parse_update_todo(execute(req)).unwrap();
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos[0].done_at.is_none());

    // Step 8: delete "buy milk".
    client.parse_delete_todo(execute(client.build_delete_todo(milk.id))).unwrap();

    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, dishes.id);

    // Step 9: the deleted id is gone for good.
    let err = client
        .parse_delete_todo(execute(client.build_delete_todo(milk.id)))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));

    let req = client.build_update_todo(milk.id, &done).unwrap();
    let err = client.parse_update_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
}
