// Dashboard page
use crate::domain::readouts::Readouts;
use crate::infrastructure::config::fill_template;
use html_escape::encode_text;

pub fn render_page(readouts: &Readouts) -> String {
    let vars = [
        ("bit_depth", format!("{:.2}", readouts.bit_depth)),
        ("corrected_bit_depth", format!("{:.2}", readouts.corrected_bit_depth)),
        ("latitude", encode_text(&readouts.position.latitude).into_owned()),
        ("longitude", encode_text(&readouts.position.longitude).into_owned()),
    ];
    fill_template(DASHBOARD_HTML, &vars)
}

const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Rig Heave Operational Guidance</title>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
    <style>
        :root {
            --accent: rgb(37, 150, 190);
            --bg: #f5f7fb;
            --surface: #ffffff;
            --text: #0c1625;
            --nav: #061d2c;
        }
        body.dark {
            --bg: #03121c;
            --surface: #061d2c;
            --text: #ffffff;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: system-ui, -apple-system, sans-serif; background: var(--bg); color: var(--text); min-height: 100vh; }

        #navbar { display: flex; justify-content: space-between; align-items: center; background: var(--nav); color: #fff; padding: 0.5rem 1.25rem; }
        #nav-left, #nav-right { display: flex; align-items: center; gap: 1.25rem; }
        #nav-left .brand { font-weight: 700; letter-spacing: 0.08em; }
        #navbar button { background: none; border: none; color: rgba(255, 255, 255, 0.55); cursor: pointer; }
        #navbar button.selected-nav { color: #fff; }
        .vr { border-left: 1px solid #fff; height: 25px; }

        .buttons-bar { display: flex; justify-content: space-between; align-items: center; padding: 1rem 1.25rem; }
        #main-aux-container button, #pdf-btn {
            padding: 0.45rem 1.4rem; border: 1px solid var(--accent); background: var(--surface);
            color: var(--text); cursor: pointer; font-weight: 600;
        }
        #main-aux-container button.selected { background: var(--accent); color: #fff; }
        #pdf-export-container { display: flex; align-items: center; gap: 1rem; position: relative; }
        #info-btn { background: none; border: none; color: var(--accent); cursor: pointer; }
        #popover {
            display: none; position: absolute; right: 11rem; top: -0.5rem; z-index: 10;
            background: var(--surface); border: 1px solid var(--accent); padding: 10px; min-width: 22rem;
        }
        #info-btn:hover + #popover, #popover:hover { display: block; }

        #graph-div { padding: 0 1.25rem; }
        #graph { height: 65vh; }
        #img-container { display: none; text-align: center; padding: 3rem 1rem; }
        #img-container img { width: 96px; }

        #bottom-info { display: flex; justify-content: space-between; gap: 2rem; padding: 1rem 1.25rem; border-top: 1px solid var(--accent); }
        .info-col { display: flex; gap: 2rem; flex-wrap: wrap; }
        .info-label { font-size: 0.75rem; opacity: 0.7; letter-spacing: 0.05em; }
        .info-value { font-weight: 600; }
        .local-time { color: var(--accent); }

        @media (max-width: 700px) and (orientation: portrait) {
            #graph, .hiding-col { display: none; }
            #img-container { display: block; }
        }
    </style>
</head>
<body>
    <nav id="navbar">
        <div id="nav-left">
            <span class="brand">ODFJELL DRILLING</span>
            <span class="hiding-col">Drilling / Rig Heave Operational Guidance</span>
        </div>
        <div id="nav-right">
            <button id="light-mode-btn" class="selected-nav" title="Light theme"><i class="fa-solid fa-sun fa-2x"></i></button>
            <button id="dark-mode-btn" title="Dark theme"><i class="fa-solid fa-moon fa-2x"></i></button>
            <div class="vr hiding-col"></div>
            <button class="hiding-col"><i class="fa-solid fa-gear fa-2x"></i></button>
            <button><i class="fa-solid fa-bars fa-2x"></i></button>
        </div>
    </nav>

    <div class="buttons-bar">
        <div id="main-aux-container">
            <button id="main-button" class="selected">MAIN</button>
            <button id="aux-button">AUX</button>
        </div>
        <div id="pdf-export-container">
            <button id="info-btn"><i class="fa-regular fa-map fa-3x"></i></button>
            <div id="popover">
                <div class="info-col">
                    <div>
                        <p class="info-label">GPS POSITION</p>
                        <p class="info-value">LAT: ${latitude}</p>
                        <p class="info-value">LON: ${longitude}</p>
                    </div>
                    <div>
                        <p class="info-label">LOCAL DATE TIME</p>
                        <p class="info-value local-time" id="local-time-popover"></p>
                    </div>
                    <div>
                        <p class="info-label">UTC DATE TIME</p>
                        <p class="info-value" id="utc-time-popover"></p>
                    </div>
                </div>
            </div>
            <button id="pdf-btn" type="button">PDF export</button>
        </div>
    </div>

    <div id="graph-div">
        <div id="graph"></div>
        <div id="img-container">
            <img src="/assets/rotate-phone-white.png" alt="">
            <p>Rotate your device for better experience</p>
        </div>
    </div>

    <div id="bottom-info">
        <div class="info-col">
            <div>
                <p class="info-label">Bit Depth</p>
                <p class="info-value" id="bit-depth">${bit_depth} m</p>
            </div>
            <div>
                <p class="info-label">Corrected Bit Depth</p>
                <p class="info-value" id="corrected-bit-depth">${corrected_bit_depth} m</p>
            </div>
        </div>
        <div class="info-col">
            <div>
                <p class="info-label">GPS POSITION</p>
                <p class="info-value">LAT: ${latitude}</p>
                <p class="info-value">LON: ${longitude}</p>
            </div>
            <div>
                <p class="info-label">LOCAL DATE TIME</p>
                <p class="info-value local-time" id="local-time"></p>
            </div>
            <div>
                <p class="info-label">UTC DATE TIME</p>
                <p class="info-value" id="utc-time"></p>
            </div>
        </div>
    </div>

    <script>
    (function () {
        var figure = null;
        var socket = null;
        var plotConfig = { displayModeBar: false, responsive: true };

        function byId(id) { return document.getElementById(id); }

        function renderView(view) {
            var dark = view.theme === 'dark';
            document.body.classList.toggle('dark', dark);
            byId('dark-mode-btn').classList.toggle('selected-nav', dark);
            byId('light-mode-btn').classList.toggle('selected-nav', !dark);
            byId('main-button').classList.toggle('selected', view.tab === 'main');
            byId('aux-button').classList.toggle('selected', view.tab === 'aux');
        }

        function renderClocks(clocks) {
            byId('local-time').textContent = clocks.local;
            byId('local-time-popover').textContent = clocks.local;
            byId('utc-time').textContent = clocks.utc;
            byId('utc-time-popover').textContent = clocks.utc;
        }

        function applyOp(target, op) {
            var node = target;
            for (var i = 0; i < op.path.length - 1; i++) {
                node = node[op.path[i]];
                if (node === undefined) { return; }
            }
            node[op.path[op.path.length - 1]] = op.value;
        }

        function drawFigure() {
            if (figure) { Plotly.react('graph', figure.data, figure.layout, plotConfig); }
        }

        function onMessage(event) {
            var msg = JSON.parse(event.data);
            switch (msg.type) {
                case 'view':
                    renderView(msg.view);
                    break;
                case 'refresh':
                    renderClocks(msg.clocks);
                    figure = msg.figure;
                    drawFigure();
                    break;
                case 'theme_patch':
                    renderView(msg.view);
                    if (figure) {
                        msg.patch.ops.forEach(function (op) { applyOp(figure, op); });
                        drawFigure();
                    }
                    break;
                case 'error':
                    console.warn('dashboard:', msg.message);
                    break;
            }
        }

        function send(message) {
            if (socket && socket.readyState === WebSocket.OPEN) {
                socket.send(JSON.stringify(message));
            }
        }

        function connect() {
            var scheme = location.protocol === 'https:' ? 'wss://' : 'ws://';
            socket = new WebSocket(scheme + location.host + '/ws');
            socket.onmessage = onMessage;
            socket.onclose = function () { setTimeout(connect, 2000); };
        }

        byId('light-mode-btn').onclick = function () { send({ type: 'set_theme', theme: 'light' }); };
        byId('dark-mode-btn').onclick = function () { send({ type: 'set_theme', theme: 'dark' }); };
        byId('main-button').onclick = function () { send({ type: 'select_tab', tab: 'main' }); };
        byId('aux-button').onclick = function () { send({ type: 'select_tab', tab: 'aux' }); };

        connect();
    })();
    </script>
</body>
</html>
"##;
