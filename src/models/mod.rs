// src/models/mod.rs
pub mod aluno;
pub mod crianca;
pub mod legado;
pub mod matricula;
pub mod mensalidade;
pub mod professor;
pub mod turma;
pub mod usuario;
