// src/services/mod.rs
pub mod aluno_service;
pub mod arquivados_service;
pub mod auth_service;
pub mod matricula_service;
pub mod mensalidade_service;
pub mod painel_service;
pub mod professor_service;
pub mod turma_service;
pub mod usuario_service;
