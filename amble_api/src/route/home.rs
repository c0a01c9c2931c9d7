pub async fn home_handler() -> &'static str {
    "Comfort-based Routing Backend is running!"
}
