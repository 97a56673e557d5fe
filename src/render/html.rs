//! Bootstrap HTML fragments

use std::fmt::Write;

use super::Render;
use crate::dashboard::{DashboardStats, MarkerPopup};
use crate::notify::Notification;
use crate::view::{AdminListView, AttractionCard, CarouselView, DetailView, ListingView};

/// Escape text for use in element content and quoted attributes
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders the site's Bootstrap markup
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Render for HtmlRenderer {
    fn carousel(&self, view: &CarouselView) -> String {
        let mut out = String::new();
        for slide in &view.slides {
            let active = if slide.active { " active" } else { "" };
            let _ = write!(
                out,
                r#"<div class="carousel-item{active}">
  <img src="{img}" class="d-block w-100 carousel-image" alt="{nome}">
  <div class="carousel-caption d-md-block">
    <div class="carousel-content">
      <span class="badge bg-warning text-dark mb-2">⭐ EM DESTAQUE</span>
      <h2 class="display-4 fw-bold mb-3">{nome}</h2>
      <p class="lead mb-4">{descricao}</p>
      <div class="d-flex gap-3 justify-content-center">
        <a href="{href}" class="btn btn-primary btn-lg px-4">Ver Detalhes</a>
        <span class="badge bg-secondary align-self-center px-3 py-2">{categoria}</span>
      </div>
    </div>
  </div>
</div>
"#,
                active = active,
                img = escape(&slide.imagem),
                nome = escape(&slide.nome),
                descricao = escape(&slide.descricao),
                href = escape(&slide.href),
                categoria = escape(&slide.categoria),
            );
        }
        out
    }

    fn listing(&self, view: &ListingView) -> String {
        let mut out = String::new();
        for card in &view.cards {
            let badge = if card.destaque {
                r#"<span class="badge bg-warning text-dark">⭐ Destaque</span>"#
            } else {
                ""
            };
            let _ = write!(
                out,
                r#"<div class="col-lg-4 col-md-6 col-sm-12">
  <div class="card h-100 shadow-sm lugar-card">
    <a href="{href}" class="text-decoration-none">
      <img src="{img}" class="card-img-top lugar-card-img" alt="{nome}">
    </a>
    <div class="card-body d-flex flex-column">
      <div class="d-flex justify-content-between align-items-start mb-2">
        <span class="badge bg-primary">{categoria}</span>
        {badge}
      </div>
      <h3 class="card-title h5 fw-bold mb-2">
        <a href="{href}" class="text-decoration-none text-dark">{nome}</a>
      </h3>
      <p class="card-text text-muted flex-grow-1">{descricao}</p>
      <div class="mt-3">
        <a href="{href}" class="btn btn-outline-primary w-100">Explorar →</a>
      </div>
    </div>
  </div>
</div>
"#,
                href = escape(&card.href),
                img = escape(&card.imagem),
                nome = escape(&card.nome),
                categoria = escape(&card.categoria),
                badge = badge,
                descricao = escape(&card.descricao),
            );
        }
        out
    }

    fn detail(&self, view: &DetailView) -> String {
        let detail = match view {
            DetailView::NotFound => {
                return r#"<div class="alert alert-warning text-center" role="alert">
  <h4>Lugar não encontrado</h4>
  <p>O lugar que você procura não existe.</p>
  <a href="index.html" class="btn btn-primary mt-3">← Voltar para Início</a>
</div>
"#
                .to_string()
            }
            DetailView::Found(detail) => detail,
        };

        let badge = if detail.destaque {
            r#"<span class="badge bg-warning text-dark fs-6">⭐ Em Destaque</span>"#
        } else {
            ""
        };

        format!(
            r#"<div class="row g-4">
  <div class="col-lg-7">
    <div class="card shadow-sm border-0">
      <img src="{img}" class="card-img-top" alt="{nome}" style="height: 450px; object-fit: cover;">
      <div class="card-body">
        <div class="d-flex justify-content-between align-items-center mb-3">
          <span class="badge bg-primary fs-6">{categoria}</span>
          {badge}
        </div>
        <h1 class="display-5 fw-bold mb-3">{nome}</h1>
        <p class="lead text-muted mb-4">{descricao}</p>
        <div class="sobre-lugar bg-light p-4 rounded">
          <h2 class="h4 fw-bold mb-3">📖 Sobre este lugar</h2>
          <p class="text-justify lh-lg">{conteudo}</p>
        </div>
      </div>
    </div>
  </div>
  <div class="col-lg-5">
    <div class="card shadow-sm border-0 sticky-top" style="top: 100px;">
      <div class="card-header bg-dark text-white">
        <h2 class="h5 mb-0">ℹ️ Informações Práticas</h2>
      </div>
      <div class="card-body">
        <div class="info-item mb-4">
          <h3 class="h6 fw-bold text-primary mb-2">📍 Endereço</h3>
          <p class="mb-0">{endereco}</p>
        </div>
        <div class="info-item mb-4">
          <h3 class="h6 fw-bold text-primary mb-2">🕐 Horário de Funcionamento</h3>
          <p class="mb-0">{horarios}</p>
        </div>
        <div class="info-item mb-4">
          <h3 class="h6 fw-bold text-primary mb-2">📞 Contato</h3>
          <p class="mb-0">{telefone}</p>
        </div>
        <div class="info-item mb-4">
          <h3 class="h6 fw-bold text-primary mb-2">📅 Última Atualização</h3>
          <p class="mb-0">{data}</p>
        </div>
        <div class="info-item mb-4">
          <h3 class="h6 fw-bold text-primary mb-2">🏷️ Categoria</h3>
          <span class="badge bg-primary fs-6">{categoria}</span>
        </div>
        <hr class="my-4">
        <div class="d-grid gap-2">
          <a href="index.html" class="btn btn-outline-primary">← Voltar para Início</a>
          <button class="btn btn-primary" onclick="window.print()">🖨️ Imprimir Informações</button>
        </div>
      </div>
    </div>
  </div>
</div>
"#,
            img = escape(&detail.imagem),
            nome = escape(&detail.nome),
            categoria = escape(&detail.categoria),
            badge = badge,
            descricao = escape(&detail.descricao),
            conteudo = escape(&detail.conteudo),
            endereco = escape(&detail.endereco),
            horarios = escape(&detail.horarios),
            telefone = escape(&detail.telefone),
            data = escape(&detail.atualizado_em),
        )
    }

    fn attractions(&self, attractions: &[AttractionCard]) -> String {
        let mut out = String::from("<div class=\"row g-4\">\n");
        for attraction in attractions {
            let _ = write!(
                out,
                r#"<div class="col-lg-3 col-md-6 col-sm-12">
  <div class="card h-100 shadow-sm atracao-card">
    <img src="{img}" class="card-img-top" alt="{nome}" style="height: 200px; object-fit: cover;">
    <div class="card-body">
      <h3 class="card-title h6 fw-bold">{nome}</h3>
      <p class="card-text small text-muted">{descricao}</p>
    </div>
  </div>
</div>
"#,
                img = escape(&attraction.imagem),
                nome = escape(&attraction.nome),
                descricao = escape(&attraction.descricao),
            );
        }
        out.push_str("</div>\n");
        out
    }

    fn admin_list(&self, view: &AdminListView) -> String {
        let rows = match view {
            AdminListView::Empty => {
                return r#"<div class="col-12">
  <div class="alert alert-info text-center">
    <i class="bi bi-info-circle me-2"></i>
    Nenhum lugar cadastrado ainda.
  </div>
</div>
"#
                .to_string()
            }
            AdminListView::Rows(rows) => rows,
        };

        let mut out = String::new();
        for row in rows {
            let badge = if row.destaque {
                r#"<span class="badge bg-warning text-dark">⭐</span>"#
            } else {
                ""
            };
            let _ = write!(
                out,
                r#"<div class="col-md-6 col-lg-4">
  <div class="card h-100 shadow-sm">
    <img src="{img}" class="card-img-top" alt="{nome}" style="height: 200px; object-fit: cover;">
    <div class="card-body">
      <div class="d-flex justify-content-between align-items-start mb-2">
        <span class="badge bg-primary">{categoria}</span>
        {badge}
      </div>
      <h5 class="card-title">{nome}</h5>
      <p class="card-text small text-muted">{excerpt}</p>
    </div>
    <div class="card-footer bg-transparent">
      <div class="d-flex gap-2">
        <a href="{href}" class="btn btn-outline-primary btn-sm flex-fill"><i class="bi bi-eye me-1"></i> Ver</a>
        <button class="btn btn-outline-warning btn-sm flex-fill" data-action="edit" data-id="{id}"><i class="bi bi-pencil me-1"></i> Editar</button>
        <button class="btn btn-outline-danger btn-sm flex-fill" data-action="delete" data-id="{id}"><i class="bi bi-trash me-1"></i> Excluir</button>
      </div>
    </div>
  </div>
</div>
"#,
                img = escape(&row.imagem),
                nome = escape(&row.nome),
                categoria = escape(&row.categoria),
                badge = badge,
                excerpt = escape(&row.excerpt),
                href = escape(&row.href),
                id = escape(&row.id),
            );
        }
        out
    }

    fn stats(&self, stats: &DashboardStats) -> String {
        let cards = [
            (stats.total, "Total de Lugares", "bi-geo-alt", "Locais cadastrados"),
            (stats.featured, "Em Destaque", "bi-star", "Locais destacados"),
            (stats.attractions, "Total Atrações", "bi-camera", "Atrações disponíveis"),
            (stats.categories, "Categorias", "bi-tags", "Tipos diferentes"),
        ];

        let mut out = String::new();
        for (value, title, icon, caption) in cards {
            let _ = write!(
                out,
                r#"<div class="col-md-3 col-sm-6">
  <div class="stats-card text-center">
    <div class="stats-number">{value}</div>
    <div class="h5">{title}</div>
    <small><i class="bi {icon} me-1"></i>{caption}</small>
  </div>
</div>
"#
            );
        }
        out
    }

    fn dashboard_unavailable(&self) -> String {
        r#"<div class="col-12">
  <div class="alert alert-warning" role="alert">
    <i class="bi bi-exclamation-triangle me-2"></i>
    <strong>Atenção:</strong> Não foi possível carregar os dados.
    Certifique-se de que o servidor da API está em execução.
  </div>
</div>
"#
        .to_string()
    }

    fn notification(&self, notification: &Notification) -> String {
        format!(
            r#"<div class="alert alert-{level} alert-dismissible fade show" role="alert">
  {message}
  <button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close"></button>
</div>
"#,
            level = notification.level.as_str(),
            message = escape(&notification.message),
        )
    }

    fn map_popup(&self, popup: &MarkerPopup) -> String {
        let star = if popup.destaque { "⭐ " } else { "" };
        format!(
            r#"<div style="max-width: 280px;">
  <h6 style="margin-bottom: 10px; color: #333; font-weight: bold;">{star}{nome}</h6>
  <p style="margin-bottom: 8px; font-size: 14px;"><strong>📍 Categoria:</strong> {categoria}</p>
  <p style="margin-bottom: 8px; font-size: 13px; color: #666;">{descricao}</p>
  <p style="margin-bottom: 8px; font-size: 12px;"><strong>🎯 Atrações:</strong> {atracoes}</p>
  <p style="margin-bottom: 8px; font-size: 12px;"><strong>📅 Cadastrado:</strong> {data}</p>
  <p style="margin-bottom: 8px; font-size: 12px;"><strong>📞 Telefone:</strong> {telefone}</p>
  <a href="{href}" target="_blank" style="color: #007bff; text-decoration: none; font-size: 12px; font-weight: bold;">Ver detalhes completos →</a>
</div>
"#,
            star = star,
            nome = escape(&popup.nome),
            categoria = escape(&popup.categoria),
            descricao = escape(&popup.descricao),
            atracoes = popup.atracoes,
            data = escape(&popup.data),
            telefone = escape(&popup.telefone),
            href = escape(&popup.href),
        )
    }
}
