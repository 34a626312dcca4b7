mod browser;
mod cofg;
mod dispatch;
mod error;
mod fs_ops;
mod http_ext;
mod intent;
mod reply;
mod request;
#[cfg(test)]
mod test;

use crate::browser::Browser;
use crate::cofg::{ build_config_from_cli, cli::Args, config::Cofg };

use actix_web::{ App, HttpServer, dev::Server, http::KeepAlive, middleware, web };
use clap::Parser;
use log::{ debug, error, info };

fn init_logger(verbose: bool) {
  env_logger::builder()
    .default_format()
    .format_module_path(true)
    .format_line_number(true)
    .format_timestamp(None)
    .filter_level(if verbose {
      log::LevelFilter::Debug
    } else {
      log::LevelFilter::Info
    })
    .parse_default_env()
    .init();
}

fn build_server(c: Cofg) -> std::io::Result<Server> {
  let addrs = c.addrs.clone();
  let data = web::Data::new(c);
  let server = HttpServer::new(move || {
    let c = data.get_ref();
    App::new()
      .app_data(data.clone())
      .wrap(middleware::Condition::new(
        c.middleware.compress,
        middleware::Compress::default(),
      ))
      .wrap(middleware::Condition::new(
        c.middleware.logger.enabling,
        middleware::Logger::new(&c.middleware.logger.format).custom_request_replace(
          "url",
          |req| http_ext::decode_url_path(&req.uri().to_string()),
        ),
      ))
      .configure(request::routes)
  })
  .keep_alive(KeepAlive::Os)
  .bind(addrs)?
  .run();
  Ok(server)
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let args = Args::parse();
  init_logger(args.verbose);

  let c = build_config_from_cli(Cofg::load()?, &args).with_absolute_root()?;
  debug!("cofg: {c:#?}");

  let results_url = c.results_url(args.grep.as_deref());
  let port = c.addrs.port;
  let server = build_server(c)?;
  println!("Static file server running at\n  => http://localhost:{port}/\nCTRL + C to shutdown");

  match args.browser.as_deref().map(Browser::from_name) {
    Some(browser) => {
      if let Err(e) = browser::launch(&browser, &results_url) {
        error!("failed to launch {}: {e}", browser.name());
      }
    }
    None => info!("no browser given, open {results_url} manually"),
  }

  server.await?;
  Ok(())
}
