//! End-user messages (pt-BR).
//!
//! Every failure the visitor can see is phrased here so both submission
//! hosts and the proxy speak with one voice.

pub const METHOD_NOT_ALLOWED: &str = "Método não permitido.";

pub const NONCE_INVALID: &str = "Falha na validação. Recarregue a página e tente novamente.";

pub const MISSING_REQUIRED_FIELDS: &str =
    "Preencha nome, e-mail, o que deseja comprar e estilo/uso pretendido.";

pub const INVALID_EMAIL: &str = "Informe um e-mail válido para continuar.";

pub const PERSISTENCE_FAILED: &str = "Erro ao salvar seu brief. Tente novamente em instantes.";

pub const BRIEF_RECEIVED: &str = "Brief recebido! Em até 24h retornamos com sua curadoria.";

/// Shown by the form script when the submission request itself fails.
pub const SUBMISSION_UNAVAILABLE: &str = "Não foi possível enviar seu brief agora. Tente novamente.";

// ---------------------------------------------------------------------------
// Fragrance proxy
// ---------------------------------------------------------------------------

pub const SEARCH_QUERY_REQUIRED: &str = "Parâmetro q é obrigatório.";

pub const PERFUME_ID_REQUIRED: &str = "Informe o ID do perfume.";

pub const UPSTREAM_FAILED: &str = "Falha ao consultar a API de fragrâncias.";

pub const UPSTREAM_KEY_MISSING: &str =
    "Chave da API de fragrâncias ausente. Configure FRAGRANCE_API_KEY no ambiente do servidor.";
