#[cfg(feature = "csr")]
fn main() {
    spa_oidc_web::start();
}

#[cfg(not(feature = "csr"))]
fn main() {
    // The shell only runs in the browser; build for wasm32 with `--features csr`.
}
