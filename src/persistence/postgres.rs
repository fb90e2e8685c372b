use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

use crate::error::{AppError, AppResult};
use crate::models::{EvaluationPatch, EvaluationRecord};

use super::EvaluationRepository;

/// Columns in `EvaluationRecord` order. Dates and timestamps come back as text.
const SELECT_COLUMNS: &str = r#"
    id,
    created_at::text AS created_at,
    data_avaliacao::text AS data_avaliacao,
    cliente_nome, cliente_celular, cliente_endereco, cliente_cidade, cliente_origem,
    veiculo_modelo, veiculo_ano, veiculo_versao, veiculo_motor, veiculo_placa,
    veiculo_km, veiculo_fipe, veiculo_manual, veiculo_chave_copia, veiculo_sinistro,
    veiculo_leilao, veiculo_batido, veiculo_obs,
    doc_nome_proprietario, doc_financiamento, doc_valor_quitacao, doc_debitos_detran,
    doc_historico_km,
    aval_lataria, aval_motor, aval_suspensao, aval_luzes_painel, aval_parabrisa,
    aval_ar_condicionado, aval_pneus, aval_interna,
    avaliador_nome,
    vendido,
    data_venda::text AS data_venda,
    valor_venda,
    fotos,
    danos_mapeados
"#;

/// Writable columns, bound as $1..$38 by `bind_fields`.
const FIELD_COLUMNS: [&str; 38] = [
    "data_avaliacao",
    "cliente_nome",
    "cliente_celular",
    "cliente_endereco",
    "cliente_cidade",
    "cliente_origem",
    "veiculo_modelo",
    "veiculo_ano",
    "veiculo_versao",
    "veiculo_motor",
    "veiculo_placa",
    "veiculo_km",
    "veiculo_fipe",
    "veiculo_manual",
    "veiculo_chave_copia",
    "veiculo_sinistro",
    "veiculo_leilao",
    "veiculo_batido",
    "veiculo_obs",
    "doc_nome_proprietario",
    "doc_financiamento",
    "doc_valor_quitacao",
    "doc_debitos_detran",
    "doc_historico_km",
    "aval_lataria",
    "aval_motor",
    "aval_suspensao",
    "aval_luzes_painel",
    "aval_parabrisa",
    "aval_ar_condicionado",
    "aval_pneus",
    "aval_interna",
    "avaliador_nome",
    "vendido",
    "data_venda",
    "valor_venda",
    "fotos",
    "danos_mapeados",
];

/// Placeholder for the n-th (1-based) writable column, with the date casts.
fn placeholder(index: usize, column: &str) -> String {
    match column {
        "data_avaliacao" => format!("${}::date", index),
        "data_venda" => format!("NULLIF(${}, '')::date", index),
        _ => format!("${}", index),
    }
}

fn insert_sql() -> String {
    let values: Vec<String> = FIELD_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| placeholder(i + 1, column))
        .collect();
    let next = FIELD_COLUMNS.len() + 1;
    format!(
        "INSERT INTO avaliacoes ({}, id, created_at) VALUES ({}, COALESCE(${}, gen_random_uuid()::text), COALESCE(${}::timestamptz, now())) RETURNING {}",
        FIELD_COLUMNS.join(", "),
        values.join(", "),
        next,
        next + 1,
        SELECT_COLUMNS
    )
}

fn replace_sql() -> String {
    let assignments: Vec<String> = FIELD_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = {}", column, placeholder(i + 1, column)))
        .collect();
    format!(
        "UPDATE avaliacoes SET {} WHERE id = ${} RETURNING {}",
        assignments.join(", "),
        FIELD_COLUMNS.len() + 1,
        SELECT_COLUMNS
    )
}

type RecordQuery<'q> = QueryAs<'q, Postgres, EvaluationRecord, PgArguments>;

fn bind_fields<'q>(query: RecordQuery<'q>, r: &'q EvaluationRecord) -> RecordQuery<'q> {
    query
        .bind(&r.data_avaliacao)
        .bind(&r.cliente_nome)
        .bind(&r.cliente_celular)
        .bind(&r.cliente_endereco)
        .bind(&r.cliente_cidade)
        .bind(&r.cliente_origem)
        .bind(&r.veiculo_modelo)
        .bind(&r.veiculo_ano)
        .bind(&r.veiculo_versao)
        .bind(&r.veiculo_motor)
        .bind(&r.veiculo_placa)
        .bind(&r.veiculo_km)
        .bind(&r.veiculo_fipe)
        .bind(r.veiculo_manual)
        .bind(r.veiculo_chave_copia)
        .bind(r.veiculo_sinistro)
        .bind(r.veiculo_leilao)
        .bind(r.veiculo_batido)
        .bind(&r.veiculo_obs)
        .bind(&r.doc_nome_proprietario)
        .bind(r.doc_financiamento)
        .bind(&r.doc_valor_quitacao)
        .bind(&r.doc_debitos_detran)
        .bind(&r.doc_historico_km)
        .bind(&r.aval_lataria)
        .bind(&r.aval_motor)
        .bind(&r.aval_suspensao)
        .bind(&r.aval_luzes_painel)
        .bind(&r.aval_parabrisa)
        .bind(&r.aval_ar_condicionado)
        .bind(&r.aval_pneus)
        .bind(&r.aval_interna)
        .bind(&r.avaliador_nome)
        .bind(r.vendido)
        .bind(&r.data_venda)
        .bind(&r.valor_venda)
        .bind(&r.fotos)
        .bind(&r.danos_mapeados)
}

/// Direct connection to the Postgres database behind the hosted table.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[tonic::async_trait]
impl EvaluationRepository for PostgresRepository {
    async fn create(&self, record: EvaluationRecord) -> AppResult<EvaluationRecord> {
        let sql = insert_sql();
        let created = bind_fields(sqlx::query_as::<_, EvaluationRecord>(&sql), &record)
            .bind(&record.id)
            .bind(&record.created_at)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(
            "Postgres create: id={}",
            created.id.as_deref().unwrap_or_default()
        );
        Ok(created)
    }

    async fn list(&self) -> AppResult<Vec<EvaluationRecord>> {
        let sql = format!(
            "SELECT {} FROM avaliacoes ORDER BY created_at DESC",
            SELECT_COLUMNS
        );
        let records = sqlx::query_as::<_, EvaluationRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<EvaluationRecord>> {
        let sql = format!("SELECT {} FROM avaliacoes WHERE id = $1", SELECT_COLUMNS);
        let record = sqlx::query_as::<_, EvaluationRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    async fn update(&self, id: &str, patch: &EvaluationPatch) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE avaliacoes SET
                vendido = COALESCE($1, vendido),
                data_venda = COALESCE(NULLIF($2, '')::date, data_venda),
                valor_venda = COALESCE($3, valor_venda),
                veiculo_obs = COALESCE($4, veiculo_obs),
                fotos = COALESCE($5, fotos),
                danos_mapeados = COALESCE($6, danos_mapeados)
            WHERE id = $7
            "#,
        )
        .bind(patch.vendido)
        .bind(&patch.data_venda)
        .bind(&patch.valor_venda)
        .bind(&patch.veiculo_obs)
        .bind(&patch.fotos)
        .bind(&patch.danos_mapeados)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("avaliação {}", id)));
        }
        tracing::info!("Postgres update: id={}", id);
        Ok(())
    }

    async fn replace(&self, id: &str, record: &EvaluationRecord) -> AppResult<()> {
        let sql = replace_sql();
        bind_fields(sqlx::query_as::<_, EvaluationRecord>(&sql), record)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("avaliação {}", id)))?;
        tracing::info!("Postgres replace: id={}", id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM avaliacoes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::info!("Postgres delete: id={}", id);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_sql_placeholders() {
        let sql = insert_sql();
        assert!(sql.starts_with("INSERT INTO avaliacoes (data_avaliacao, cliente_nome,"));
        assert!(sql.contains("VALUES ($1::date, $2, $3,"));
        assert!(sql.contains("NULLIF($35, '')::date"));
        assert!(sql.contains("COALESCE($39, gen_random_uuid()::text)"));
        assert!(sql.contains("COALESCE($40::timestamptz, now())"));
    }

    #[test]
    fn test_replace_sql_targets_id() {
        let sql = replace_sql();
        assert!(sql.contains("data_avaliacao = $1::date"));
        assert!(sql.contains("danos_mapeados = $38"));
        assert!(sql.contains("WHERE id = $39"));
    }
}
