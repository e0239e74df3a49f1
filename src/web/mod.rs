// src/web/mod.rs
pub mod arquivados_handlers;
pub mod auth_handlers;
pub mod cadastro_handlers;
pub mod conta_handlers;
pub mod diagnostico_handlers;
pub mod financeiro_handlers;
pub mod home_handlers;
pub mod institucional_handlers;
pub mod matricula_handlers;
pub mod mensalidade_handlers;
pub mod mw_auth;
pub mod perfil_handlers;
pub mod professor_handlers;
pub mod routes;
pub mod turma_handlers;
