//! Confirmation email templates.
//!
//! Subject and HTML body for the lead-facing confirmation mail, in two
//! variants keyed on whether a promo code was issued. Content is
//! Spanish-language inline-styled HTML, matching the landing page's
//! tone.

/// Subject line for the confirmation email.
pub fn email_subject(has_promo: bool) -> &'static str {
    if has_promo {
        "¡Tu código de descuento de Turnio está aquí!"
    } else {
        "Gracias por registrarte en Turnio"
    }
}

/// Render the HTML body for the confirmation email.
///
/// `promo_code` switches between the discount variant (code shown
/// prominently with a reminder to keep it for launch) and the plain
/// early-access confirmation.
pub fn email_html(promo_code: Option<&str>) -> String {
    let main_block = match promo_code {
        Some(code) => format!(
            r#"<h2 style="color: #1f2937; margin-top: 0; font-size: 24px; font-weight: 600;">¡Gracias por registrarte!</h2>
        <p style="color: #374151; line-height: 1.6; font-size: 16px; margin-bottom: 20px;">
          Aquí tienes tu código de descuento exclusivo para cuando lancemos Turnio:
        </p>
        <div style="background-color: #ffffff; border: 2px solid #93c5fd; border-radius: 8px; padding: 16px; text-align: center; margin-bottom: 20px;">
          <span style="color: #2563eb; font-family: monospace; font-size: 28px; font-weight: bold; letter-spacing: 2px;">{code}</span>
        </div>
        <p style="color: #374151; line-height: 1.6; font-size: 16px; margin-bottom: 20px;">
          Guarda este código: podrás usarlo al contratar cualquier plan en el lanzamiento.
        </p>"#
        ),
        None => r#"<h2 style="color: #1f2937; margin-top: 0; font-size: 24px; font-weight: 600;">¡Gracias por registrarte!</h2>
        <p style="color: #374151; line-height: 1.6; font-size: 16px; margin-bottom: 20px;">
          Ya estás en la lista de acceso anticipado. Te avisaremos en cuanto Turnio esté disponible.
        </p>"#
            .to_string(),
    };

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #ffffff;">
      <div style="text-align: center; margin-bottom: 30px; padding: 20px 0;">
        <h1 style="color: #2563eb; margin: 0; font-size: 32px; font-weight: bold;">Turnio</h1>
        <p style="color: #6b7280; margin: 10px 0; font-size: 16px;">Simplificando la gestión de turnos</p>
      </div>
      <div style="background-color: #f8fafc; padding: 30px; border-radius: 10px; margin-bottom: 20px; border: 1px solid #e5e7eb;">
        {main_block}
      </div>
      <div style="text-align: center; margin: 30px 0;">
        <p style="color: #374151; font-size: 16px; margin-bottom: 15px;">
          <strong>¿Tenés preguntas?</strong>
        </p>
        <p style="color: #6b7280; font-size: 14px;">
          Responde a este email o contáctanos en
          <a href="mailto:support@rebaseit.tech" style="color: #2563eb; text-decoration: none;">support@rebaseit.tech</a>
        </p>
      </div>
      <div style="text-align: center; color: #6b7280; font-size: 14px; padding-top: 20px; border-top: 1px solid #e5e7eb;">
        <p style="margin: 0 0 10px 0;">© 2025 Turnio. Todos los derechos reservados.</p>
        <p style="margin: 0; font-size: 12px;">
          <a href="https://turnio.rebaseit.tech" style="color: #6b7280; text-decoration: none;">turnio.rebaseit.tech</a>
        </p>
      </div>
    </div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_varies_with_promo_presence() {
        assert_ne!(email_subject(true), email_subject(false));
        assert!(email_subject(true).contains("descuento"));
    }

    #[test]
    fn promo_variant_embeds_the_code() {
        let html = email_html(Some("TURNIO10-ABCD1234"));
        assert!(html.contains("TURNIO10-ABCD1234"));
        assert!(html.contains("descuento"));
    }

    #[test]
    fn plain_variant_has_no_code_block() {
        let html = email_html(None);
        assert!(!html.contains("TURNIO10-"));
        assert!(html.contains("acceso anticipado"));
    }
}
