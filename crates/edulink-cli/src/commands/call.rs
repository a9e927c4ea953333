//! `edulink call` — raw string-named method invocation, and
//! `edulink methods` — registry introspection.

use edulink_core::PortalClient;

use super::print_json;

pub async fn call(client: &PortalClient, method: &str, params_str: &str) -> Result<(), String> {
    let params: serde_json::Value =
        serde_json::from_str(params_str).map_err(|e| format!("Invalid JSON params: {}", e))?;

    let env = client
        .call(method, params)
        .await
        .map_err(|e| e.to_string())?;
    print_json(&serde_json::to_value(&env).unwrap_or_default());
    Ok(())
}

pub fn methods(client: &PortalClient) -> Result<(), String> {
    for name in client.method_list() {
        println!("{}", name);
    }
    Ok(())
}
