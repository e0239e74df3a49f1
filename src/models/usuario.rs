// src/models/usuario.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Conta de acesso ao sistema (tabela 'usuario'). Os timestamps ficam
// na tabela, mantidos por trigger; a aplicação não os lê.
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: i64,
    pub email: String,
    pub senha_hash: String,
    pub nome: String,
}

/// Versão do perfil sem o hash, usada em `/api/perfil`.
#[derive(Debug, Clone, Serialize)]
pub struct PerfilResumo {
    pub id: i64,
    pub email: String,
    pub nome: String,
}

impl From<&Usuario> for PerfilResumo {
    fn from(u: &Usuario) -> Self {
        PerfilResumo {
            id: u.id,
            email: u.email.clone(),
            nome: u.nome.clone(),
        }
    }
}

// Dados do formulário de login
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub senha: String,
}

// Formulário de registo de conta (POST /cadastro)
#[derive(Debug, Deserialize)]
pub struct CadastroContaForm {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

// Formulário de troca de senha (POST /senha)
#[derive(Debug, Deserialize)]
pub struct TrocaSenhaForm {
    pub email: String,
    pub senha_atual: String,
    pub senha_nova: String,
}

// Formulário de atualização do próprio perfil (POST /meuperfil)
#[derive(Debug, Deserialize)]
pub struct PerfilForm {
    pub nome: String,
}
