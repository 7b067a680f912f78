// Copyright (c) 2022 Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

fn main() {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .proxy(reqwest::Proxy::custom(move |url| {
            let proxy = env_proxy::resolve_proxy_for(url)
                .filter(|proxy| !proxy.bypass().no_proxy_for(url));
            match &proxy {
                None => println!("Using direct connection for URL {}", url),
                Some(p) => println!("Using proxy {} for URL {}", p.endpoint(), url),
            }
            proxy.map(|p| {
                let mut endpoint = p.endpoint().clone();
                if let Some(credentials) = p.credentials() {
                    let _ = endpoint.set_username(credentials.username());
                    let _ = endpoint.set_password(Some(credentials.password()));
                }
                endpoint
            })
        }))
        .build()
        .unwrap();

    let response = client.get("https://httpbin.org/status/200").send().unwrap();
    println!("Status code: {}", response.status());
}
