use axum::Router;
use droplet_ips::models::Droplet;
use serde_json::{json, Value};

/// Serve `app` on an ephemeral local port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_api(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[allow(dead_code)]
pub fn droplet_json(id: u64, tags: &[&str], public: &str, private: &str) -> Value {
    json!({
        "id": id,
        "name": format!("droplet-{}", id),
        "status": "active",
        "tags": tags,
        "networks": {
            "v4": [
                {"ip_address": private, "netmask": "255.255.0.0", "gateway": "10.0.0.1", "type": "private"},
                {"ip_address": public, "netmask": "255.255.240.0", "gateway": "1.0.0.1", "type": "public"}
            ],
            "v6": []
        }
    })
}

#[allow(dead_code)]
pub fn droplet(id: u64, tags: &[&str], public: &str, private: &str) -> Droplet {
    serde_json::from_value(droplet_json(id, tags, public, private)).unwrap()
}
