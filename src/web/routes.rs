// src/web/routes.rs
use crate::{
    state::AppState,
    web::{
        arquivados_handlers, auth_handlers, cadastro_handlers, conta_handlers,
        diagnostico_handlers, financeiro_handlers, home_handlers, institucional_handlers,
        matricula_handlers, mensalidade_handlers, mw_auth, perfil_handlers, professor_handlers,
        turma_handlers,
    },
};
use axum::{
    middleware,
    response::Redirect,
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas Públicas ---
    let public_routes = Router::new()
        .route("/", get(institucional_handlers::show_index))
        .route("/inicio", get(|| async { Redirect::to("/home") }))
        .route(
            "/login",
            get(auth_handlers::show_login_form).post(auth_handlers::handle_login),
        )
        .route("/logout", get(auth_handlers::handle_logout))
        .route(
            "/cadastro",
            get(conta_handlers::show_cadastro_conta).post(conta_handlers::handle_cadastro_conta),
        )
        .route(
            "/senha",
            get(conta_handlers::show_troca_senha).post(conta_handlers::handle_troca_senha),
        )
        .route("/termossete", get(institucional_handlers::show_termos))
        .route("/testar-banco", get(diagnostico_handlers::testar_banco));

    // --- Rotas Protegidas ---
    // Tudo aqui passa primeiro pelo portão de autorização.
    let authenticated_routes = Router::new()
        .route("/home", get(home_handlers::show_home))
        .route(
            "/meuperfil",
            get(perfil_handlers::show_perfil).post(perfil_handlers::handle_atualizar_perfil),
        )
        .route("/api/perfil", get(perfil_handlers::api_perfil))
        .route("/api/financeiro", get(financeiro_handlers::api_resumo_financeiro))
        .route("/financeiro", get(financeiro_handlers::show_financeiro))
        .route("/mensalidade", get(mensalidade_handlers::show_mensalidades))
        .route("/mensalidade/pagar/{id}", post(mensalidade_handlers::handle_pagar))
        .route("/arquivados", get(arquivados_handlers::show_arquivados))
        .route(
            "/arquivados/desarquivar/{id}",
            post(arquivados_handlers::handle_desarquivar),
        )
        .route(
            "/turmas",
            get(turma_handlers::show_turmas).post(turma_handlers::handle_criar_turma),
        )
        .route("/turmas/arquivar/{id}", post(turma_handlers::handle_arquivar_turma))
        .route(
            "/matriculas",
            get(matricula_handlers::show_matriculas)
                .post(matricula_handlers::handle_criar_matricula),
        )
        .route(
            "/matriculas/encerrar/{id}",
            post(matricula_handlers::handle_encerrar_matricula),
        )
        .route(
            "/professores",
            get(professor_handlers::show_professores)
                .post(professor_handlers::handle_criar_professor),
        )
        .route(
            "/professores/arquivar/{id}",
            post(professor_handlers::handle_arquivar_professor),
        )
        .route(
            "/cadastro-aluno",
            get(cadastro_handlers::show_cadastro_aluno)
                .post(cadastro_handlers::handle_cadastro_aluno),
        )
        .route(
            "/cadastro-responsavel",
            get(cadastro_handlers::show_cadastro_responsavel)
                .post(cadastro_handlers::handle_cadastro_responsavel),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            mw_auth::require_auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool_em_memoria;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    async fn app_de_teste() -> (Router, sqlx::SqlitePool) {
        let pool = pool_em_memoria().await;
        let app = create_router(AppState { db_pool: pool.clone() })
            .layer(SessionManagerLayer::new(MemoryStore::default()));
        (app, pool)
    }

    async fn corpo_como_texto(resposta: axum::response::Response) -> String {
        let bytes = resposta.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    // custo bcrypt baixo só para os testes
    async fn conta_de_teste(pool: &sqlx::SqlitePool) {
        let hash = bcrypt::hash("segredo123", 4).unwrap();
        sqlx::query("INSERT INTO usuario (nome, email, senha_hash) VALUES ('Ana', 'ana@creche.com', ?1)")
            .bind(hash)
            .execute(pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn rota_protegida_sem_sessao_redireciona_para_login() {
        let (app, _pool) = app_de_teste().await;

        for uri in ["/home", "/turmas", "/arquivados", "/meuperfil", "/api/perfil"] {
            let resposta = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resposta.status(), StatusCode::SEE_OTHER, "uri: {}", uri);
            assert_eq!(resposta.headers()[header::LOCATION], "/login", "uri: {}", uri);
        }
    }

    #[tokio::test]
    async fn mutacao_protegida_sem_sessao_tambem_e_barrada() {
        let (app, _pool) = app_de_teste().await;

        let resposta = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/arquivados/desarquivar/5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resposta.status(), StatusCode::SEE_OTHER);
        assert_eq!(resposta.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn sonda_de_banco_responde_json_de_sucesso() {
        let (app, _pool) = app_de_teste().await;

        let resposta = app
            .oneshot(Request::builder().uri("/testar-banco").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resposta.status(), StatusCode::OK);

        let corpo = corpo_como_texto(resposta).await;
        let json: serde_json::Value = serde_json::from_str(&corpo).unwrap();
        assert_eq!(json["status"], "success");
        assert!(json["details"].as_str().unwrap().contains("Banco conectado"));
    }

    #[tokio::test]
    async fn login_correto_abre_sessao_e_da_acesso_ao_painel() {
        let (app, pool) = app_de_teste().await;
        conta_de_teste(&pool).await;

        let resposta = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("email=ana%40creche.com&senha=segredo123"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resposta.status(), StatusCode::SEE_OTHER);
        assert_eq!(resposta.headers()[header::LOCATION], "/home");

        let cookie = resposta.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();

        let painel = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/home")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(painel.status(), StatusCode::OK);
        let corpo = corpo_como_texto(painel).await;
        assert!(corpo.contains("Minha Creche"));
    }

    #[tokio::test]
    async fn fluxo_de_arquivados_lista_e_desarquiva() {
        let (app, pool) = app_de_teste().await;
        conta_de_teste(&pool).await;
        sqlx::raw_sql(
            r#"
            INSERT INTO cadastro_crianca (id, nome, i_nascimento, ativo) VALUES (1, 'Bia', '2020-06-15', 0);
            INSERT INTO responsavel (cadastro_crianca_id, nome, parentesco)
                VALUES (1, 'Carlos', 'Pai'), (1, 'Joana', 'Mãe');
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        let login = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("email=ana%40creche.com&senha=segredo123"))
                    .unwrap(),
            )
            .await
            .unwrap();
        let cookie = login.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();

        let lista = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/arquivados")
                    .header(header::COOKIE, cookie.clone())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(lista.status(), StatusCode::OK);
        let corpo = corpo_como_texto(lista).await;
        assert!(corpo.contains("Bia"));
        // responsável principal: preferência pelo parentesco "Mãe"
        assert!(corpo.contains("Joana"));
        assert!(!corpo.contains("Carlos"));

        let desarquivar = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/arquivados/desarquivar/1")
                    .header(header::COOKIE, cookie.clone())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(desarquivar.status(), StatusCode::SEE_OTHER);
        assert_eq!(desarquivar.headers()[header::LOCATION], "/arquivados");

        let lista = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/arquivados")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let corpo = corpo_como_texto(lista).await;
        assert!(corpo.contains("Nenhuma ficha arquivada"));
    }

    #[tokio::test]
    async fn senha_errada_volta_para_o_formulario_com_erro() {
        let (app, pool) = app_de_teste().await;
        conta_de_teste(&pool).await;

        let resposta = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("email=ana%40creche.com&senha=palpite"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resposta.status(), StatusCode::OK);
        let corpo = corpo_como_texto(resposta).await;
        assert!(corpo.contains("E-mail ou senha inválidos."));
    }
}
