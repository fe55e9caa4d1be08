pub fn startup(url: &str) -> String {
    [
        "🚀 Starting REACT Check-In App...".to_string(),
        format!("📱 Server running at {}", url),
        "🔑 Demo Credentials:".to_string(),
        "   Student ID: demo123".to_string(),
        "   Password: password".to_string(),
        String::new(),
        "🌐 Opening browser...".to_string(),
        "Press Ctrl+C to stop the server".to_string(),
        String::new(),
    ]
    .join("\n")
}

pub fn shutdown() -> String {
    "\n👋 Server stopped. Thanks for using REACT!".to_string()
}

pub fn port_in_use(port: u16) -> String {
    format!(
        "❌ Port {} is already in use. Please close other servers or try a different port.",
        port
    )
}

pub fn startup_failure(err: &dyn std::fmt::Display) -> String {
    format!("❌ Error starting server: {}", err)
}
