// src/models/crianca.rs
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::FromRow;

use crate::models::legado;

/// Ficha da criança (tabela 'cadastro_crianca'). `ativo = false` marca
/// a ficha como arquivada; não há outra marca de arquivamento.
#[derive(Debug, Clone, FromRow)]
pub struct CadastroCrianca {
    pub id: i64,
    pub nome: String,
    pub i_nascimento: Option<NaiveDate>,
    pub observacoes: Option<String>,
    pub ativo: bool,
}

/// Par nome/parentesco usado na escolha do responsável principal.
#[derive(Debug, Clone)]
pub struct ResponsavelResumo {
    pub nome: String,
    pub parentesco: Option<String>,
}

/// Linha pronta para o template de arquivados.
#[derive(Debug, Clone)]
pub struct CriancaArquivadaView {
    pub id: i64,
    pub nome: String,
    pub idade_formatada: String,
    pub responsavel_principal_nome: String,
}

// Formulário de cadastro de criança (POST /cadastro-aluno).
// O front-end legado envia 'ativo' como texto ("true"/"false").
#[derive(Debug, Deserialize)]
pub struct NovaCriancaForm {
    pub nome: String,
    #[serde(default, deserialize_with = "legado::de_data_opcional")]
    pub i_nascimento: Option<NaiveDate>,
    #[serde(default)]
    pub observacoes: Option<String>,
    #[serde(
        default = "legado::default_true",
        deserialize_with = "legado::de_flag_legado"
    )]
    pub ativo: bool,
}

// Formulário de vínculo de responsável (POST /cadastro-responsavel)
#[derive(Debug, Deserialize)]
pub struct NovoResponsavelForm {
    pub cadastro_crianca_id: i64,
    pub nome: String,
    #[serde(default)]
    pub parentesco: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
}
