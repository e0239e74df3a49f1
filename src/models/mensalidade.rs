// src/models/mensalidade.rs
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// Linha do extrato de mensalidades com o nome do aluno resolvido.
#[derive(Debug, Clone, FromRow)]
pub struct MensalidadeView {
    pub id: i64,
    pub aluno_nome: String,
    pub referencia: String,
    pub valor_centavos: i64,
    pub vencimento: NaiveDate,
    pub pago: bool,
}

impl MensalidadeView {
    /// Valor em reais para exibição ("R$ 350,00").
    pub fn valor_formatado(&self) -> String {
        formatar_centavos(self.valor_centavos)
    }
}

pub fn formatar_centavos(centavos: i64) -> String {
    format!("R$ {},{:02}", centavos / 100, (centavos % 100).abs())
}

/// Resumo agregado devolvido por GET /api/financeiro.
#[derive(Debug, Clone, Serialize)]
pub struct ResumoFinanceiro {
    pub total_cobrado_centavos: i64,
    pub total_recebido_centavos: i64,
    pub total_pendente_centavos: i64,
    pub meses: Vec<ResumoMes>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ResumoMes {
    pub referencia: String,
    pub cobrado_centavos: i64,
    pub recebido_centavos: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formata_valor_em_reais() {
        assert_eq!(formatar_centavos(35000), "R$ 350,00");
        assert_eq!(formatar_centavos(990), "R$ 9,90");
        assert_eq!(formatar_centavos(5), "R$ 0,05");
        assert_eq!(formatar_centavos(0), "R$ 0,00");
    }
}
