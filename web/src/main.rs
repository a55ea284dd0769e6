#[cfg(target_arch = "wasm32")]
pub fn main() {
    game_portal_web::run();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
