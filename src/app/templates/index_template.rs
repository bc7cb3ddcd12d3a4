pub fn index_template() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="ko">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Prompt Forge</title>
  <style>
    * { box-sizing: border-box; }
    body {
      margin: 0;
      padding: 24px;
      background: #f9fafb;
      color: #1f2937;
      font-family: "Apple SD Gothic Neo", "Malgun Gothic", sans-serif;
    }
    .layout { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; }
    @media (max-width: 960px) { .layout { grid-template-columns: 1fr; } }
    .panel { background: #fff; border-radius: 12px; padding: 24px; box-shadow: 0 4px 12px rgba(0,0,0,.08); }
    h2 { margin-top: 0; }
    label { display: block; margin: 12px 0 4px; font-size: 14px; font-weight: 600; }
    input[type=text], input[type=number], select {
      width: 100%; padding: 8px 10px; border: 1px solid #d1d5db; border-radius: 6px; font-size: 14px;
    }
    .check { display: flex; align-items: center; gap: 8px; margin-top: 16px; }
    .check input { width: 18px; height: 18px; }
    .info { margin-left: 6px; cursor: pointer; }
    .group { margin-top: 16px; padding: 12px 16px; border-radius: 8px; }
    .setting { border: 1px solid #e5e7eb; background: #f9fafb; }
    .advanced { border-left: 4px solid #93c5fd; background: #eff6ff; }
    .midjourney { border-left: 4px solid #c4b5fd; background: #f5f3ff; }
    .hidden { display: none; }
    .tabs { display: flex; gap: 8px; padding: 4px; background: #f3f4f6; border-radius: 8px; }
    .tabs button { flex: 1; padding: 8px; border: 0; border-radius: 6px; background: transparent; cursor: pointer; }
    .tabs button.active { background: #3b82f6; color: #fff; }
    textarea {
      width: 100%; height: 240px; margin-top: 16px; padding: 12px; resize: none;
      border: 1px solid #d1d5db; border-radius: 8px; background: #f9fafb; font-size: 15px;
    }
    .actions { display: flex; justify-content: center; gap: 16px; margin-top: 16px; }
    .actions button, .modal button {
      padding: 10px 20px; border: 0; border-radius: 8px; background: #2563eb; color: #fff; font-weight: 600; cursor: pointer;
    }
    .overlay {
      position: fixed; inset: 0; display: flex; align-items: center; justify-content: center;
      background: rgba(75,85,99,.5); padding: 16px;
    }
    .modal { background: #fff; border-radius: 8px; max-width: 440px; width: 100%; padding: 24px; }
    .modal p { white-space: pre-wrap; }
    .modal .footer { display: flex; justify-content: flex-end; }
  </style>
</head>
<body>
  <div class="layout">
    <div class="panel">
      <h2>프롬프트 설정 / Prompt Settings</h2>

      <label>플랫폼 / Platform <span class="info" data-info="platform" title="정보 보기">📎</span></label>
      <select data-field="platform" data-options="platforms"></select>

      <label>대상 / Subject <span class="info" data-info="subject" title="정보 보기">📎</span></label>
      <input type="text" data-field="subject" />

      <label>속성 / Attribute <span class="info" data-info="attribute" title="정보 보기">📎</span></label>
      <input type="text" data-field="attribute" />

      <label>스타일 / Style <span class="info" data-info="style" title="정보 보기">📎</span></label>
      <select data-field="style" data-options="styles" data-blank="true"></select>

      <label>구도 / Composition <span class="info" data-info="composition" title="정보 보기">📎</span></label>
      <select data-field="composition" data-options="compositions" data-blank="true"></select>

      <div class="group setting">
        <h3>환경/배경 / Setting</h3>
        <div id="setting-fields"></div>
      </div>

      <label>감정 표현 / Emotion</label>
      <select data-field="emotion" data-options="emotions" data-blank="true"></select>

      <label>색 구성 / Color Scheme</label>
      <select data-field="colorScheme" data-options="colorSchemes" data-blank="true"></select>

      <label>네거티브 프롬프트 / Negative Prompt</label>
      <input type="text" data-field="negativePrompt" id="negative-prompt" />

      <label class="check">
        <input type="checkbox" data-field="advanced" /> 고급 옵션 표시 / Show Advanced Options
      </label>

      <div class="group advanced hidden" id="advanced-group">
        <h3>고급 설정 / General Advanced Settings</h3>
        <label>가로세로 비율 / Aspect Ratio</label>
        <select data-field="aspectRatio" data-options="aspectRatios"></select>
        <label>품질 / Quality</label>
        <select data-field="quality" data-options="qualities"></select>
        <label>스타일 강도 / Stylize Weight</label>
        <input type="number" data-field="stylizeWeight" min="0" max="1000" />
        <label>시드 값 / Seed</label>
        <input type="text" data-field="seed" />
      </div>

      <div class="group midjourney hidden" id="midjourney-group">
        <h3>Midjourney 전용 설정</h3>
        <label>Midjourney 버전 / MJ Version</label>
        <select data-field="mjVersion" data-options="mjVersions"></select>
        <label>Midjourney 스타일 / MJ Style</label>
        <select data-field="mjStyle" data-options="mjStyles"></select>
        <label>혼돈도 / Chaos</label>
        <input type="number" data-field="chaos" min="0" max="100" />
        <label>이미지 가중치 / Image Weight</label>
        <input type="number" data-field="imageWeight" min="0" max="2" step="0.1" />
        <label class="check">
          <input type="checkbox" data-field="tile" /> 타일링 / Tile
        </label>
        <label>중단 단계 / Stop</label>
        <input type="number" data-field="stop" min="10" max="100" />
      </div>
    </div>

    <div class="panel">
      <h2>생성된 프롬프트 / Generated Prompt</h2>
      <div class="tabs">
        <button data-lang="ko">한글 프롬프트</button>
        <button data-lang="en">English Prompt</button>
      </div>
      <textarea id="output" readonly></textarea>
      <div class="actions">
        <button id="copy"></button>
        <button id="download"></button>
      </div>
    </div>
  </div>

  <div class="overlay hidden" id="overlay">
    <div class="modal">
      <h3 id="overlay-title"></h3>
      <p id="overlay-content"></p>
      <div class="footer"><button id="overlay-close">닫기</button></div>
    </div>
  </div>

  <script>
    const NUMERIC = ["stylizeWeight", "chaos", "imageWeight", "stop"];
    const LABELS = {
      ko: { copy: "프롬프트 복사", download: "프롬프트 다운로드" },
      en: { copy: "Copy Prompt", download: "Download Prompt" },
    };
    let current = { prompt: "", lang: "ko" };

    async function api(method, path, body) {
      const init = { method, headers: {} };
      if (body !== undefined) {
        init.headers["Content-Type"] = "application/json";
        init.body = JSON.stringify(body);
      }
      const res = await fetch(path, init);
      if (!res.ok) {
        const error = await res.json().catch(() => ({ message: res.statusText }));
        throw new Error(error.message);
      }
      if (res.status === 204) return null;
      return res.json();
    }

    // Requests that change the session run one at a time, in input order.
    let pending = Promise.resolve();
    function enqueue(task) {
      pending = pending.then(task).catch((err) => console.warn(err.message));
      return pending;
    }

    function showOutput(output) {
      current = output;
      const area = document.getElementById("output");
      area.value = output.prompt;
      area.placeholder = output.placeholder;
      document.querySelectorAll("[data-lang]").forEach((tab) => {
        tab.classList.toggle("active", tab.dataset.lang === output.lang);
      });
      document.getElementById("copy").textContent = LABELS[output.lang].copy;
      document.getElementById("download").textContent = LABELS[output.lang].download;
    }

    function showGroups(form) {
      document.getElementById("advanced-group").classList.toggle("hidden", !form.advanced);
      document.getElementById("midjourney-group").classList.toggle("hidden", form.platform !== "Midjourney");
    }

    function fillOptions(options) {
      document.querySelectorAll("select[data-options]").forEach((select) => {
        const values = options[select.dataset.options] || [];
        if (select.dataset.blank) select.append(new Option("", ""));
        values.forEach((value) => select.append(new Option(value, value)));
      });
      const settings = document.getElementById("setting-fields");
      options.settingFields.forEach((field) => {
        const label = document.createElement("label");
        label.textContent = field.label;
        const input = document.createElement("input");
        input.type = "text";
        input.placeholder = field.placeholder;
        input.dataset.setting = field.key;
        settings.append(label, input);
      });
      document.getElementById("negative-prompt").placeholder = options.negativePromptPlaceholder;
    }

    function fillForm(form) {
      document.querySelectorAll("[data-field]").forEach((el) => {
        const value = form[el.dataset.field];
        if (el.type === "checkbox") el.checked = value;
        else el.value = value;
      });
      document.querySelectorAll("[data-setting]").forEach((el) => {
        el.value = form.setting[el.dataset.setting];
      });
      showGroups(form);
    }

    function syncGroups() {
      showGroups({
        advanced: document.querySelector('[data-field="advanced"]').checked,
        platform: document.querySelector('[data-field="platform"]').value,
      });
    }

    function sendUpdate(update) {
      return enqueue(async () => showOutput(await api("PATCH", "/form", update)));
    }

    function bindInputs() {
      document.querySelectorAll("[data-field]").forEach((el) => {
        const event = el.tagName === "SELECT" || el.type === "checkbox" ? "change" : "input";
        el.addEventListener(event, () => {
          const field = el.dataset.field;
          let value = el.value;
          if (el.type === "checkbox") value = el.checked;
          else if (NUMERIC.includes(field)) {
            value = Number(value);
            if (!Number.isFinite(value)) return;
          }
          if (field === "advanced" || field === "platform") syncGroups();
          sendUpdate({ scope: "field", update: { field, value } });
        });
      });
      document.querySelectorAll("[data-setting]").forEach((el) => {
        el.addEventListener("input", () => {
          sendUpdate({ scope: "setting", update: { key: el.dataset.setting, value: el.value } });
        });
      });
      document.querySelectorAll("[data-lang]").forEach((tab) => {
        tab.addEventListener("click", () => {
          enqueue(async () => showOutput(await api("PUT", "/prompt/lang", { lang: tab.dataset.lang })));
        });
      });
      document.querySelectorAll("[data-info]").forEach((icon) => {
        icon.addEventListener("click", () => {
          enqueue(async () => {
            const entry = await api("POST", "/info/" + icon.dataset.info);
            document.getElementById("overlay-title").textContent = entry.title;
            document.getElementById("overlay-content").textContent = entry.content;
            document.getElementById("overlay").classList.remove("hidden");
          });
        });
      });
      document.getElementById("overlay-close").addEventListener("click", () => {
        document.getElementById("overlay").classList.add("hidden");
        enqueue(() => api("DELETE", "/info"));
      });
      document.getElementById("copy").addEventListener("click", async () => {
        try {
          await navigator.clipboard.writeText(current.prompt);
        } catch (_) {
          enqueue(() => api("POST", "/prompt/copy"));
        }
      });
      document.getElementById("download").addEventListener("click", () => {
        window.location.href = "/prompt/download";
      });
    }

    async function init() {
      fillOptions(await api("GET", "/form/options"));
      fillForm(await api("GET", "/form"));
      showOutput(await api("GET", "/prompt"));
      bindInputs();
    }

    init();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn function_body<'a>(page: &'a str, signature: &str) -> &'a str {
        let start = page.find(signature).unwrap();
        let end = page[start..].find("\n    }\n").unwrap();
        &page[start..start + end]
    }

    #[test]
    fn test_api_rejects_error_statuses() {
        let api = function_body(index_template(), "async function api(");

        assert!(api.contains("if (!res.ok)"));
        assert!(api.find("!res.ok").unwrap() < api.find("return res.json()").unwrap());
    }

    #[test]
    fn test_updates_are_serialized_without_refetching_form() {
        let page = index_template();
        let send_update = function_body(page, "function sendUpdate(");

        assert!(send_update.contains("enqueue("));
        assert!(!send_update.contains("\"/form\")"));
        assert!(!send_update.contains("\"GET\""));
        assert!(page.contains("pending = pending.then(task)"));
    }
}
