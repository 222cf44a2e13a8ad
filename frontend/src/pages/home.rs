use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::reveal::{self, RevealSet, SectionObserver};
use crate::scroll::{self, ScrollSampler};
use crate::theme::{self, Theme, ThemeAction, ThemeState};

fn scroll_to_id(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let revealed = use_reducer(RevealSet::default);
    let theme = use_reducer(ThemeState::default);
    let scroll_y = use_state(|| 0.0_f64);
    let preselected_service = use_state(|| None::<String>);

    // Load the stored preference once and alternate it for this visit.
    {
        let theme = theme.clone();
        use_effect_with_deps(
            move |_| {
                let next = theme::on_load(theme::stored_theme(), theme::random_coin_is_dark());
                theme.dispatch(ThemeAction::Set(next));
                || ()
            },
            (),
        );
    }

    // Every change lands on the document root and in storage right away.
    {
        use_effect_with_deps(
            move |current: &Option<Theme>| {
                if let Some(current) = *current {
                    theme::apply_to_document(current);
                    theme::persist(current);
                }
                || ()
            },
            theme.current,
        );
    }

    {
        let dispatcher = revealed.dispatcher();
        use_effect_with_deps(
            move |_| {
                let observer = SectionObserver::start(dispatcher);
                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let sampler = ScrollSampler::start(move |y| scroll_y.set(y));
                move || {
                    if let Some(sampler) = sampler {
                        sampler.stop();
                    }
                }
            },
            (),
        );
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.dispatch(ThemeAction::Toggle))
    };

    let request_service = {
        let preselected_service = preselected_service.clone();
        move |service: &'static str| {
            let preselected_service = preselected_service.clone();
            Callback::from(move |_: MouseEvent| {
                preselected_service.set(Some(service.to_string()));
                scroll_to_id("contacto");
            })
        }
    };

    let go_to_packages = Callback::from(|_: MouseEvent| scroll_to_id("paquetes"));
    let go_to_contact = Callback::from(|_: MouseEvent| scroll_to_id("contacto"));

    let theme_icon = match theme.current {
        Some(Theme::Dark) => "☀️",
        _ => "🌙",
    };
    let shape = scroll::shape_style(*scroll_y);

    html! {
        <div class="landing">
            <nav class="top-nav">
                <span class="brand">{"HARDCODED"}</span>
                <div class="nav-actions">
                    <button class="nav-ghost" onclick={toggle_theme} title="Cambiar tema">
                        {theme_icon}
                    </button>
                    <button class="nav-ghost" onclick={go_to_packages.clone()}>{"Paquetes"}</button>
                    <button class="nav-solid" onclick={go_to_contact}>{"Contactar"}</button>
                </div>
            </nav>

            <section class={classes!("hero", reveal::reveal_class(&revealed, "hero"))} data-section="hero">
                <div class="hero-shape one" style={shape.css()}></div>
                <div class="hero-shape two" style={shape.css()}></div>
                <div class="hero-inner">
                    <p class="hero-kicker">{"Consultoría en desarrollo de software"}</p>
                    <h1>{"Tu negocio merece una página que sí vende"}</h1>
                    <p class="hero-sub">
                        {"Diseñamos y programamos sitios a la medida para pymes mexicanas. \
                          Sin plantillas, sin mensualidades escondidas."}
                    </p>
                    <div class="hero-actions">
                        <button class="primary" onclick={go_to_packages}>{"Ver paquetes"}</button>
                        <button class="ghost" onclick={request_service("asesoria")}>
                            {"Quiero asesoría gratuita"}
                        </button>
                    </div>
                </div>
            </section>

            <section class={classes!("section", reveal::reveal_class(&revealed, "showcase"))} data-section="showcase">
                <h2>{"Expertos en presencia digital"}</h2>
                <p class="section-sub">{"Lo que entregamos en cada proyecto"}</p>
                <div class="showcase-grid">
                    <article>
                        <h3>{"⚡ Rápido de verdad"}</h3>
                        <p>{"Sitios que cargan en menos de un segundo, también con datos móviles."}</p>
                    </article>
                    <article>
                        <h3>{"📱 Primero el celular"}</h3>
                        <p>{"Ocho de cada diez visitas llegan desde un teléfono. Ahí empezamos."}</p>
                    </article>
                    <article>
                        <h3>{"🔍 Listo para Google"}</h3>
                        <p>{"Estructura pensada para que te encuentren tus clientes, no tu competencia."}</p>
                    </article>
                    <article>
                        <h3>{"🛠 Hecho a mano"}</h3>
                        <p>{"Código propio, nada de constructores que se rompen con cada actualización."}</p>
                    </article>
                </div>
            </section>

            <section
                id="paquetes"
                class={classes!("section", reveal::reveal_class(&revealed, "pricing"))}
                data-section="pricing"
            >
                <h2>{"Dos paquetes, cero letras chiquitas"}</h2>
                <p class="section-sub">{"Pago único. El sitio es tuyo."}</p>
                <div class="packages">
                    <div class="package-card">
                        <h3>{"Presencia Digital Profesional"}</h3>
                        <p class="package-price">{"$6,000 MXN"}</p>
                        <ul>
                            <li>{"Hasta 5 secciones a la medida"}</li>
                            <li>{"Diseño responsivo"}</li>
                            <li>{"Formulario de contacto directo a tu correo"}</li>
                            <li>{"SEO básico y analítica"}</li>
                            <li>{"Entrega en 2 semanas"}</li>
                        </ul>
                        <button class="primary" onclick={request_service("empresarial")}>
                            {"Quiero este paquete"}
                        </button>
                    </div>
                    <div class="package-card featured">
                        <span class="package-tag">{"Más popular"}</span>
                        <h3>{"Tienda Online Ilimitada"}</h3>
                        <p class="package-price">{"$11,000 MXN"}</p>
                        <ul>
                            <li>{"Catálogo de productos ilimitado"}</li>
                            <li>{"Carrito y pagos en línea"}</li>
                            <li>{"Panel para administrar pedidos"}</li>
                            <li>{"Capacitación para tu equipo"}</li>
                            <li>{"Entrega en 4 semanas"}</li>
                        </ul>
                        <button class="primary" onclick={request_service("ecommerce")}>
                            {"Quiero vender en línea"}
                        </button>
                    </div>
                </div>
            </section>

            <section class={classes!("section", reveal::reveal_class(&revealed, "decision"))} data-section="decision">
                <h2>{"¿No sabes cuál elegir?"}</h2>
                <div class="decision-grid">
                    <article>
                        <h3>{"1"}</h3>
                        <p>{"¿Vendes productos que se envían o se recogen?"}</p>
                    </article>
                    <article>
                        <h3>{"2"}</h3>
                        <p>{"¿Necesitas cobrar en línea o solo recibir pedidos?"}</p>
                    </article>
                    <article>
                        <h3>{"3"}</h3>
                        <p>{"¿Tu catálogo cambia cada semana o casi nunca?"}</p>
                    </article>
                </div>
                <button class="ghost" onclick={request_service("asesoria")}>
                    {"Mejor platiquemos, la asesoría es gratis"}
                </button>
            </section>

            <section class={classes!("section", reveal::reveal_class(&revealed, "features"))} data-section="features">
                <div class="feature-grid">
                    <article>
                        <h3>{"Código a la medida"}</h3>
                        <p>
                            {"Cada sitio se construye desde cero para tu negocio. Eso significa \
                              que crece contigo: hoy una página, mañana una tienda, después lo \
                              que tu operación pida."}
                        </p>
                    </article>
                    <article>
                        <h3>{"Acompañamiento directo"}</h3>
                        <p>
                            {"Hablas con quien programa tu sitio, no con un vendedor. Respuestas \
                              por WhatsApp el mismo día, antes y después de la entrega."}
                        </p>
                    </article>
                </div>
            </section>

            <section class={classes!("section", reveal::reveal_class(&revealed, "process"))} data-section="process">
                <h2>{"Así trabajamos"}</h2>
                <ol class="process-steps">
                    <li>
                        <h3>{"Platicamos tu idea"}</h3>
                        <p>{"Una llamada de 30 minutos para entender tu negocio y tus clientes."}</p>
                    </li>
                    <li>
                        <h3>{"Diseñamos y construimos"}</h3>
                        <p>{"Te mostramos avances cada semana; nada se queda en una caja negra."}</p>
                    </li>
                    <li>
                        <h3>{"Lanzamos juntos"}</h3>
                        <p>{"Publicamos, medimos y te enseñamos a sacarle jugo al sitio."}</p>
                    </li>
                </ol>
            </section>

            <section class={classes!("section", "cta-banner", reveal::reveal_class(&revealed, "cta"))} data-section="cta">
                <h2>{"¿Listo para crecer?"}</h2>
                <p>{"Cuéntanos tu proyecto hoy y recibe tu cotización en menos de 24 horas."}</p>
                <button class="primary" onclick={request_service("asesoria")}>
                    {"Empezar mi proyecto"}
                </button>
            </section>

            <section
                id="contacto"
                class={classes!("section", reveal::reveal_class(&revealed, "contact"))}
                data-section="contact"
            >
                <h2>{"Hablemos de tu proyecto"}</h2>
                <div class="contact-layout">
                    <div class="contact-aside">
                        <p>{"Respondemos el mismo día hábil."}</p>
                        <p class="contact-line">{"📧 hola@hardcoded.space"}</p>
                        <p class="contact-line">{"📱 +52 55 1111 2222 (WhatsApp)"}</p>
                    </div>
                    <ContactForm preselected_service={(*preselected_service).clone()} />
                </div>
            </section>

            <footer class="footer">
                <span>{"HARDCODED · hardcoded.space"}</span>
                <span>{"Hecho en México"}</span>
            </footer>

            {
                if scroll::price_badge_visible(*scroll_y) {
                    html! {
                        <div class="price-badge">
                            <p class="price-badge-title">{"Paquetes desde"}</p>
                            <p class="price-badge-price">{"$6,000 MXN"}</p>
                            <button onclick={request_service("asesoria")}>{"Cotizar ahora"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                :root {
                    --bg: #f7f7f5;
                    --surface: #ffffff;
                    --text: #1b1b1f;
                    --muted: #5c5f66;
                    --border: #e3e3df;
                    --accent: #3b82f6;
                    --accent-soft: rgba(59, 130, 246, 0.12);
                }
                html.dark {
                    --bg: #101014;
                    --surface: #1a1a21;
                    --text: #f2f2f4;
                    --muted: #9ea1a8;
                    --border: #2a2a33;
                    --accent: #60a5fa;
                    --accent-soft: rgba(96, 165, 250, 0.14);
                }
                * { box-sizing: border-box; }
                body {
                    margin: 0;
                    font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif;
                    background: var(--bg);
                    color: var(--text);
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 0.9rem 1.5rem;
                    background: color-mix(in srgb, var(--bg) 82%, transparent);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid var(--border);
                    z-index: 20;
                }
                .brand { font-weight: 800; letter-spacing: 0.12em; }
                .nav-actions { display: flex; gap: 0.6rem; }
                button {
                    font: inherit;
                    cursor: pointer;
                    border-radius: 10px;
                    border: 1px solid transparent;
                    padding: 0.6rem 1.2rem;
                    transition: transform 0.15s ease, background 0.2s ease;
                }
                button:hover { transform: translateY(-1px); }
                button:disabled { opacity: 0.6; cursor: wait; transform: none; }
                .nav-ghost, .ghost {
                    background: transparent;
                    border-color: var(--border);
                    color: var(--text);
                }
                .nav-solid, .primary {
                    background: var(--accent);
                    border-color: var(--accent);
                    color: #fff;
                }
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    overflow: hidden;
                    padding: 6rem 1.5rem 4rem;
                }
                .hero-inner { position: relative; max-width: 720px; z-index: 2; }
                .hero-kicker {
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    font-size: 0.8rem;
                    color: var(--muted);
                }
                .hero h1 { font-size: clamp(2.2rem, 5vw, 3.6rem); margin: 0.6rem 0 1rem; }
                .hero-sub { color: var(--muted); font-size: 1.1rem; line-height: 1.6; }
                .hero-actions {
                    display: flex;
                    gap: 0.8rem;
                    justify-content: center;
                    margin-top: 2rem;
                    flex-wrap: wrap;
                }
                .hero-shape {
                    position: absolute;
                    width: 420px;
                    height: 420px;
                    filter: blur(2px);
                    opacity: 0.35;
                    z-index: 1;
                }
                .hero-shape.one {
                    top: -120px;
                    left: -120px;
                    background: linear-gradient(135deg, var(--accent), #a855f7);
                }
                .hero-shape.two {
                    bottom: -140px;
                    right: -100px;
                    background: linear-gradient(315deg, var(--accent), #22d3ee);
                }
                .section {
                    max-width: 1040px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                    text-align: center;
                }
                .section h2 { font-size: clamp(1.8rem, 4vw, 2.4rem); margin-bottom: 0.4rem; }
                .section-sub { color: var(--muted); margin-bottom: 2.5rem; }
                .reveal {
                    opacity: 0;
                    transform: translateY(26px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .reveal.visible { opacity: 1; transform: none; }
                .showcase-grid, .decision-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(210px, 1fr));
                    gap: 1.2rem;
                    margin-bottom: 2rem;
                }
                .showcase-grid article, .decision-grid article, .feature-grid article {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 14px;
                    padding: 1.4rem;
                    text-align: left;
                }
                .packages {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .package-card {
                    position: relative;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 18px;
                    padding: 2rem 1.6rem;
                    text-align: left;
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }
                .package-card.featured { border-color: var(--accent); box-shadow: 0 12px 40px var(--accent-soft); }
                .package-tag {
                    position: absolute;
                    top: -12px;
                    right: 20px;
                    background: var(--accent);
                    color: #fff;
                    font-size: 0.75rem;
                    padding: 0.2rem 0.8rem;
                    border-radius: 999px;
                }
                .package-price { font-size: 2rem; font-weight: 800; margin: 0; }
                .package-card ul { margin: 0 0 1rem; padding-left: 1.1rem; color: var(--muted); flex: 1; }
                .package-card li { margin: 0.35rem 0; }
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .process-steps {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.2rem;
                    list-style: none;
                    padding: 0;
                }
                .process-steps li {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 14px;
                    padding: 1.4rem;
                    text-align: left;
                }
                .cta-banner {
                    background: var(--accent-soft);
                    border-radius: 24px;
                    margin: 0 auto 2rem;
                }
                .contact-layout {
                    display: grid;
                    grid-template-columns: 1fr 1.6fr;
                    gap: 2rem;
                    text-align: left;
                }
                .contact-aside { color: var(--muted); }
                .contact-line { font-weight: 600; color: var(--text); }
                .contact-form { display: flex; flex-direction: column; gap: 0.9rem; }
                .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 0.9rem; }
                .contact-form input, .contact-form select, .contact-form textarea {
                    font: inherit;
                    color: var(--text);
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 10px;
                    padding: 0.75rem 0.9rem;
                    width: 100%;
                }
                .contact-form textarea { resize: vertical; }
                .form-note { border-radius: 10px; padding: 0.7rem 0.9rem; margin: 0; }
                .form-note.success { background: rgba(34, 197, 94, 0.14); color: #16a34a; }
                .form-note.problem { background: rgba(239, 68, 68, 0.14); color: #dc2626; }
                .price-badge {
                    position: fixed;
                    bottom: 1.4rem;
                    right: 1.4rem;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 16px;
                    padding: 1rem 1.2rem;
                    box-shadow: 0 14px 40px rgba(0, 0, 0, 0.18);
                    text-align: center;
                    z-index: 15;
                }
                .price-badge-title { margin: 0; font-size: 0.75rem; color: var(--muted); }
                .price-badge-price { margin: 0.1rem 0 0.6rem; font-weight: 800; font-size: 1.2rem; }
                .footer {
                    display: flex;
                    justify-content: space-between;
                    padding: 1.5rem;
                    color: var(--muted);
                    border-top: 1px solid var(--border);
                    font-size: 0.85rem;
                }
                @media (max-width: 720px) {
                    .form-row, .contact-layout { grid-template-columns: 1fr; }
                    .hero-shape { width: 260px; height: 260px; }
                }
                "#}
            </style>
        </div>
    }
}
