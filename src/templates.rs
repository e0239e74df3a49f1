// src/templates.rs
use askama::Template;

use crate::models::{
    aluno::Aluno,
    crianca::{CadastroCrianca, CriancaArquivadaView},
    matricula::MatriculaView,
    mensalidade::MensalidadeView,
    professor::Professor,
    turma::Turma,
};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub erro: Option<String>,
}

#[derive(Template)]
#[template(path = "cadastro.html")]
pub struct CadastroContaPage {
    pub erro: Option<String>,
    pub sucesso: Option<String>,
}

#[derive(Template)]
#[template(path = "senha.html")]
pub struct SenhaPage {
    pub mensagem: Option<String>,
    pub erro: Option<String>,
}

#[derive(Template)]
#[template(path = "termossete.html")]
pub struct TermosPage;

/// Painel inicial. Os contadores chegam já formatados: número em texto
/// ou o sentinela "!" quando as consultas falharam.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub mensagem: String,
    pub nome_creche: String,
    pub professores: String,
    pub alunos: String,
    pub turmas: String,
    pub matriculas: String,
}

#[derive(Template)]
#[template(path = "meuperfil.html")]
pub struct PerfilPage {
    pub nome: String,
    pub email: String,
    pub sucesso: Option<String>,
}

#[derive(Template)]
#[template(path = "mensalidade.html")]
pub struct MensalidadePage {
    pub mensalidades: Vec<MensalidadeView>,
    pub erro: Option<String>,
}

#[derive(Template)]
#[template(path = "financeiro.html")]
pub struct FinanceiroPage;

#[derive(Template)]
#[template(path = "arquivados.html")]
pub struct ArquivadosPage {
    pub criancas: Vec<CriancaArquivadaView>,
}

#[derive(Template)]
#[template(path = "turmas.html")]
pub struct TurmasPage {
    pub turmas: Vec<Turma>,
    pub erro: Option<String>,
}

#[derive(Template)]
#[template(path = "matriculas.html")]
pub struct MatriculasPage {
    pub matriculas: Vec<MatriculaView>,
    pub alunos: Vec<Aluno>,
    pub turmas: Vec<Turma>,
    pub erro: Option<String>,
}

#[derive(Template)]
#[template(path = "professores.html")]
pub struct ProfessoresPage {
    pub professores: Vec<Professor>,
    pub erro: Option<String>,
}

#[derive(Template)]
#[template(path = "cadastro_aluno.html")]
pub struct CadastroAlunoPage;

#[derive(Template)]
#[template(path = "cadastro_responsavel.html")]
pub struct CadastroResponsavelPage {
    pub fichas: Vec<CadastroCrianca>,
}
