// Generated proto modules will be included here after build
// Run `cargo build` to generate the proto code

pub mod common {
    include!("avaliacoes.common.rs");
}

pub mod evaluations {
    include!("avaliacoes.evaluations.rs");
}

pub mod health {
    include!("avaliacoes.health.rs");
}
